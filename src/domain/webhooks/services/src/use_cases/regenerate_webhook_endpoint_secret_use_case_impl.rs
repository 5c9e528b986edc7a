// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface};
use folio_time_source::SystemTimeSource;
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn RegenerateWebhookEndpointSecretUseCase)]
pub struct RegenerateWebhookEndpointSecretUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    secret_generator: Arc<dyn WebhookSecretGenerator>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RegenerateWebhookEndpointSecretUseCase for RegenerateWebhookEndpointSecretUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "RegenerateWebhookEndpointSecretUseCaseImpl::execute",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<RegenerateWebhookEndpointSecretResult, RegenerateWebhookEndpointSecretError> {
        let mut endpoint =
            WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await?;
        if endpoint.is_removed() {
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        }

        let secret = self.secret_generator.generate_secret()?;
        let exposed_secret = secret.exposed_value().to_string();

        // Attempts started before this save keep signing with the old secret;
        // everything after it, retries of older deliveries included, signs
        // with the new one
        endpoint
            .rotate_secret(self.time_source.now(), secret)
            .int_err()?;
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .int_err()?;

        tracing::info!("Webhook endpoint secret rotated");
        Ok(RegenerateWebhookEndpointSecretResult {
            secret: exposed_secret,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
