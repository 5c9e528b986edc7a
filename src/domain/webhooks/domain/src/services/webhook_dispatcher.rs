// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_internal_error::InternalError;

use crate::{TenantID, WebhookDeliveryID, WebhookEventID, WebhookEventType};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Entry point for platform modules that want to announce a business event.
///
/// Dispatching fans the event out to every enabled endpoint of the tenant
/// subscribed to the event type, creating one delivery per endpoint and
/// queueing it for asynchronous processing. The call returns as soon as the
/// deliveries are queued and never waits for any HTTP request.
#[async_trait::async_trait]
pub trait WebhookDispatcher: Send + Sync {
    /// Returns `None` when no endpoint matched, in which case nothing is
    /// recorded at all.
    async fn dispatch_event(
        &self,
        tenant_id: TenantID,
        event_type: WebhookEventType,
        payload: serde_json::Value,
    ) -> Result<Option<WebhookEventDispatch>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEventDispatch {
    pub webhook_event_id: WebhookEventID,
    pub delivery_ids: Vec<WebhookDeliveryID>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
