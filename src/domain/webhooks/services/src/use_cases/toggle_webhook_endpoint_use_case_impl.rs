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
#[interface(dyn ToggleWebhookEndpointUseCase)]
pub struct ToggleWebhookEndpointUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl ToggleWebhookEndpointUseCase for ToggleWebhookEndpointUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "ToggleWebhookEndpointUseCaseImpl::execute",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<ToggleWebhookEndpointResult, ToggleWebhookEndpointError> {
        let mut endpoint =
            WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await?;
        if endpoint.is_removed() {
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        }

        let now = self.time_source.now();
        let is_active = if endpoint.is_active() {
            endpoint.pause(now).int_err()?;
            false
        } else {
            endpoint.resume(now).int_err()?;
            true
        };

        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .int_err()?;

        tracing::info!(is_active, "Webhook endpoint toggled");
        Ok(ToggleWebhookEndpointResult { is_active })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
