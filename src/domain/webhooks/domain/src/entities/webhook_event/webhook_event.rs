// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A domain event captured for webhook fan-out.
///
/// The payload is recorded once and shared by every delivery produced for it,
/// so all endpoints observe the same document regardless of retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub event_id: WebhookEventID,
    pub tenant_id: TenantID,
    pub event_type: WebhookEventType,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl WebhookEvent {
    pub fn new(
        event_id: WebhookEventID,
        tenant_id: TenantID,
        event_type: WebhookEventType,
        payload: serde_json::Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            tenant_id,
            event_type,
            payload,
            created_at,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
