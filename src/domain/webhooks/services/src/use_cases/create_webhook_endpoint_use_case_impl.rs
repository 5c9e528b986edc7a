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

use super::helpers;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn CreateWebhookEndpointUseCase)]
pub struct CreateWebhookEndpointUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    secret_generator: Arc<dyn WebhookSecretGenerator>,
    webhooks_config: Arc<WebhooksConfig>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CreateWebhookEndpointUseCase for CreateWebhookEndpointUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "CreateWebhookEndpointUseCaseImpl::execute",
        skip_all,
        fields(%tenant_id, %endpoint_name, %target_url),
    )]
    async fn execute(
        &self,
        tenant_id: TenantID,
        endpoint_name: WebhookEndpointName,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        timeout_seconds: Option<u32>,
        max_retries: Option<u32>,
    ) -> Result<CreateWebhookEndpointResult, CreateWebhookEndpointError> {
        helpers::validate_webhook_target_url(&target_url)?;

        if event_types.is_empty() {
            return Err(WebhookNoEventTypesProvidedError {}.into());
        }
        helpers::validate_webhook_event_types(&event_types)?;
        let event_types = helpers::deduplicate_event_types(event_types);

        let timeout_seconds =
            timeout_seconds.unwrap_or(self.webhooks_config.default_timeout_seconds);
        let max_retries = max_retries.unwrap_or(self.webhooks_config.default_max_retries);
        helpers::validate_webhook_delivery_config(timeout_seconds, max_retries)?;

        let maybe_existing_id = self
            .endpoint_event_store
            .find_endpoint_id_by_tenant_and_name(tenant_id, &endpoint_name)
            .await
            .map_err(|e| match e {
                FindWebhookEndpointError::Internal(e) => e,
            })?;
        if maybe_existing_id.is_some() {
            return Err(WebhookEndpointDuplicateNameError { endpoint_name }.into());
        }

        let secret = self.secret_generator.generate_secret()?;

        // The plaintext leaves this function once and is never readable again
        let exposed_secret = secret.exposed_value().to_string();

        let mut endpoint = WebhookEndpoint::new(
            self.time_source.now(),
            WebhookEndpointID::new_generated(),
            tenant_id,
            endpoint_name,
            target_url,
            event_types,
            secret,
            timeout_seconds,
            max_retries,
        );
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .int_err()?;

        tracing::info!(endpoint_id = %endpoint.endpoint_id, "Webhook endpoint created");

        Ok(CreateWebhookEndpointResult {
            endpoint_id: endpoint.endpoint_id,
            secret: exposed_secret,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
