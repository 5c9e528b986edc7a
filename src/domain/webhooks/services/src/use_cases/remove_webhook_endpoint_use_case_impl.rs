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
#[interface(dyn RemoveWebhookEndpointUseCase)]
pub struct RemoveWebhookEndpointUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RemoveWebhookEndpointUseCase for RemoveWebhookEndpointUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "RemoveWebhookEndpointUseCaseImpl::execute",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<(), RemoveWebhookEndpointError> {
        let mut endpoint =
            WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await?;

        // Removal is idempotent at the store level but not at the API level:
        // a second removal reports the endpoint as gone
        if endpoint.is_removed() {
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        }

        endpoint.remove(self.time_source.now()).int_err()?;
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .int_err()?;

        tracing::info!("Webhook endpoint removed");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
