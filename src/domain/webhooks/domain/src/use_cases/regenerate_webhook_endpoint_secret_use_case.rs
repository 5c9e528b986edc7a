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
pub trait RegenerateWebhookEndpointSecretUseCase: Send + Sync {
    /// Replaces the endpoint's signing secret. Attempts executed after the
    /// rotation sign with the new secret, including retries of deliveries
    /// created before it.
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<RegenerateWebhookEndpointSecretResult, RegenerateWebhookEndpointSecretError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct RegenerateWebhookEndpointSecretResult {
    /// Plaintext replacement secret, exposed to the caller this once.
    pub secret: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum RegenerateWebhookEndpointSecretError {
    #[error(transparent)]
    NotFound(#[from] WebhookEndpointNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<LoadError<WebhookEndpointState>> for RegenerateWebhookEndpointSecretError {
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
