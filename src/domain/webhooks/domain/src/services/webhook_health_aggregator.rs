// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use folio_internal_error::InternalError;

use crate::{
    WebhookEndpointHealthRecord,
    WebhookEndpointHealthStatus,
    WebhookEndpointID,
    WebhookPingStatus,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Owns all writes to endpoint health counters and derives health tiers.
///
/// Counters move only when a delivery reaches a terminal status, once per
/// delivery regardless of how many attempts it took. Test pings touch the
/// `last_ping` fields and nothing else.
#[async_trait::async_trait]
pub trait WebhookHealthAggregator: Send + Sync {
    async fn record_outcome(
        &self,
        endpoint_id: WebhookEndpointID,
        success: bool,
    ) -> Result<(), InternalError>;

    async fn record_ping(
        &self,
        endpoint_id: WebhookEndpointID,
        pinged_at: DateTime<Utc>,
        status: WebhookPingStatus,
    ) -> Result<(), InternalError>;

    async fn endpoint_health(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealth, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEndpointHealth {
    pub record: WebhookEndpointHealthRecord,
    pub success_rate: f64,
    pub status: WebhookEndpointHealthStatus,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
