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
pub trait ToggleWebhookEndpointUseCase: Send + Sync {
    /// Pauses an enabled endpoint or resumes a paused one. Pausing stops new
    /// deliveries from being created but does not cancel attempts already in
    /// flight or retries already scheduled.
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<ToggleWebhookEndpointResult, ToggleWebhookEndpointError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleWebhookEndpointResult {
    /// Activity state after the toggle.
    pub is_active: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum ToggleWebhookEndpointError {
    #[error(transparent)]
    NotFound(#[from] WebhookEndpointNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<LoadError<WebhookEndpointState>> for ToggleWebhookEndpointError {
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
