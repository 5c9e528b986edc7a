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
pub trait UpdateWebhookEndpointUseCase: Send + Sync {
    /// Applies the provided fields to the endpoint, leaving `None` fields
    /// untouched. Deliveries already queued keep the configuration they were
    /// created with.
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
        endpoint_name: Option<WebhookEndpointName>,
        target_url: Option<url::Url>,
        event_types: Option<Vec<WebhookEventType>>,
        timeout_seconds: Option<u32>,
        max_retries: Option<u32>,
    ) -> Result<(), UpdateWebhookEndpointError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum UpdateWebhookEndpointError {
    #[error(transparent)]
    NotFound(#[from] WebhookEndpointNotFoundError),

    #[error(transparent)]
    InvalidTargetUrl(#[from] WebhookInvalidTargetUrlError),

    #[error(transparent)]
    NoEventTypesProvided(#[from] WebhookNoEventTypesProvidedError),

    #[error(transparent)]
    UnsupportedEventType(#[from] WebhookUnsupportedEventTypeError),

    #[error(transparent)]
    DuplicateName(#[from] WebhookEndpointDuplicateNameError),

    #[error(transparent)]
    InvalidDeliveryConfig(#[from] WebhookInvalidDeliveryConfigError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<LoadError<WebhookEndpointState>> for UpdateWebhookEndpointError {
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
