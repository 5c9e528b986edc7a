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
pub trait RemoveWebhookEndpointUseCase: Send + Sync {
    /// Removes the endpoint from the registry. Removal is terminal: the
    /// endpoint disappears from listings, and queued deliveries targeting it
    /// are aborted when their turn comes.
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<(), RemoveWebhookEndpointError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum RemoveWebhookEndpointError {
    #[error(transparent)]
    NotFound(#[from] WebhookEndpointNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<LoadError<WebhookEndpointState>> for RemoveWebhookEndpointError {
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
