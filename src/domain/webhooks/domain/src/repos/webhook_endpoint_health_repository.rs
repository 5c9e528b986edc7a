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

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Holds the derived delivery counters per endpoint.
///
/// Increments are atomic read-modify-write operations: concurrent workers
/// finishing deliveries of different endpoints, or even the same one, must
/// never lose a count.
#[async_trait::async_trait]
pub trait WebhookEndpointHealthRepository: Send + Sync {
    /// Bumps the success counter and returns the updated record
    async fn increment_success(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealthRecord, UpdateWebhookEndpointHealthError>;

    /// Bumps the failure counter and returns the updated record
    async fn increment_failure(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealthRecord, UpdateWebhookEndpointHealthError>;

    /// Records the outcome of a test delivery without touching the counters
    async fn record_ping(
        &self,
        endpoint_id: WebhookEndpointID,
        pinged_at: DateTime<Utc>,
        status: WebhookPingStatus,
    ) -> Result<(), UpdateWebhookEndpointHealthError>;

    /// Returns a zeroed record for endpoints that have no terminal deliveries
    /// yet
    async fn get_health(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealthRecord, GetWebhookEndpointHealthError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum UpdateWebhookEndpointHealthError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum GetWebhookEndpointHealthError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
