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
#[interface(dyn UpdateWebhookEndpointUseCase)]
pub struct UpdateWebhookEndpointUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl UpdateWebhookEndpointUseCase for UpdateWebhookEndpointUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "UpdateWebhookEndpointUseCaseImpl::execute",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
        endpoint_name: Option<WebhookEndpointName>,
        target_url: Option<url::Url>,
        event_types: Option<Vec<WebhookEventType>>,
        timeout_seconds: Option<u32>,
        max_retries: Option<u32>,
    ) -> Result<(), UpdateWebhookEndpointError> {
        let mut endpoint =
            WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await?;
        if endpoint.is_removed() {
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        }

        if let Some(target_url) = &target_url {
            helpers::validate_webhook_target_url(target_url)?;
        }

        let event_types = match event_types {
            Some(event_types) => {
                if event_types.is_empty() {
                    return Err(WebhookNoEventTypesProvidedError {}.into());
                }
                helpers::validate_webhook_event_types(&event_types)?;
                Some(helpers::deduplicate_event_types(event_types))
            }
            None => None,
        };

        // Untouched fields still participate in validation: the settings that
        // result from the update must be acceptable as a whole
        helpers::validate_webhook_delivery_config(
            timeout_seconds.unwrap_or(endpoint.timeout_seconds),
            max_retries.unwrap_or(endpoint.max_retries),
        )?;

        if let Some(new_name) = &endpoint_name {
            let maybe_existing_id = self
                .endpoint_event_store
                .find_endpoint_id_by_tenant_and_name(endpoint.tenant_id, new_name)
                .await
                .map_err(|e| match e {
                    FindWebhookEndpointError::Internal(e) => e,
                })?;

            // Renaming an endpoint to its current name is not a conflict
            if let Some(existing_id) = maybe_existing_id
                && existing_id != endpoint_id
            {
                return Err(WebhookEndpointDuplicateNameError {
                    endpoint_name: new_name.clone(),
                }
                .into());
            }
        }

        endpoint
            .modify(
                self.time_source.now(),
                endpoint_name,
                target_url,
                event_types,
                timeout_seconds,
                max_retries,
            )
            .int_err()?;
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .int_err()?;

        tracing::info!("Webhook endpoint updated");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
