// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_internal_error::InternalError;
use thiserror::Error;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait CreateWebhookEndpointUseCase: Send + Sync {
    /// Registers a new endpoint for the tenant. `timeout_seconds` and
    /// `max_retries` fall back to the platform defaults when `None`.
    async fn execute(
        &self,
        tenant_id: TenantID,
        endpoint_name: WebhookEndpointName,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        timeout_seconds: Option<u32>,
        max_retries: Option<u32>,
    ) -> Result<CreateWebhookEndpointResult, CreateWebhookEndpointError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct CreateWebhookEndpointResult {
    pub endpoint_id: WebhookEndpointID,

    /// Plaintext signing secret. This is the only place it is ever exposed:
    /// the caller must hand it to the operator now or lose it.
    pub secret: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum CreateWebhookEndpointError {
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

#[derive(Debug, Error)]
#[error("Invalid webhook target url '{url}': {reason}")]
pub struct WebhookInvalidTargetUrlError {
    pub url: url::Url,
    pub reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
#[error("At least one webhook event type must be provided")]
pub struct WebhookNoEventTypesProvidedError {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
#[error("Unsupported webhook event type '{event_type}'")]
pub struct WebhookUnsupportedEventTypeError {
    pub event_type: WebhookEventType,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
#[error("Webhook endpoint named '{endpoint_name}' already exists for this tenant")]
pub struct WebhookEndpointDuplicateNameError {
    pub endpoint_name: WebhookEndpointName,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
#[error("Invalid webhook delivery configuration: {reason}")]
pub struct WebhookInvalidDeliveryConfigError {
    pub reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
