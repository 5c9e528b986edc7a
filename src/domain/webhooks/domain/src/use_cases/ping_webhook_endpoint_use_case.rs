// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_event_sourcing::LoadError;
use folio_internal_error::{ErrorIntoInternal, InternalError};
use thiserror::Error;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait PingWebhookEndpointUseCase: Send + Sync {
    /// Sends a single `test.ping` delivery to the endpoint and waits for the
    /// result. Pings bypass the queue and the subscription filter, are never
    /// retried, and leave the endpoint's success and failure counters alone.
    /// Paused endpoints can be pinged.
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<PingWebhookEndpointResult, PingWebhookEndpointError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct PingWebhookEndpointResult {
    pub delivery_id: WebhookDeliveryID,
    pub outcome: WebhookDeliveryAttemptOutcome,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum PingWebhookEndpointError {
    #[error(transparent)]
    NotFound(#[from] WebhookEndpointNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<LoadError<WebhookEndpointState>> for PingWebhookEndpointError {
    fn from(value: LoadError<WebhookEndpointState>) -> Self {
        match value {
            LoadError::NotFound(err) => Self::NotFound(WebhookEndpointNotFoundError {
                endpoint_id: err.query,
            }),
            LoadError::ProjectionError(err) => Self::Internal(err.int_err()),
            LoadError::Internal(err) => Self::Internal(err),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
