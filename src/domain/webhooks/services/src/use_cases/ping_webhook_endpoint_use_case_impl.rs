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
#[interface(dyn PingWebhookEndpointUseCase)]
pub struct PingWebhookEndpointUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    webhook_event_repository: Arc<dyn WebhookEventRepository>,
    delivery_worker: Arc<dyn WebhookDeliveryWorker>,
    webhooks_config: Arc<WebhooksConfig>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl PingWebhookEndpointUseCase for PingWebhookEndpointUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "PingWebhookEndpointUseCaseImpl::execute",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<PingWebhookEndpointResult, PingWebhookEndpointError> {
        // Paused endpoints are pingable: operators check connectivity before
        // resuming traffic
        let endpoint =
            WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await?;
        if endpoint.is_removed() {
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        }

        let now = self.time_source.now();

        let webhook_event_id = WebhookEventID::new_generated();
        let webhook_event = WebhookEvent::new(
            webhook_event_id,
            endpoint.tenant_id,
            WebhookEventTypeCatalog::test_ping(),
            serde_json::json!({
                "message": "Webhook endpoint connectivity test",
            }),
            now,
        );
        self.webhook_event_repository
            .create_event(&webhook_event)
            .await
            .map_err(|e| match e {
                CreateWebhookEventError::DuplicateId(e) => e.int_err(),
                CreateWebhookEventError::Internal(e) => e,
            })?;

        // A ping is a real recorded delivery, but it is capped at a single
        // attempt and executed inline so the operator sees the outcome
        // synchronously
        let delivery_id = WebhookDeliveryID::new_generated();
        let mut delivery = WebhookDelivery::new(
            now,
            delivery_id,
            DeliveryChannel::Webhook { endpoint_id },
            webhook_event_id,
            WebhookEventTypeCatalog::test_ping(),
            RetryPolicy::new(
                1,
                self.webhooks_config.retry_min_delay_seconds,
                self.webhooks_config.retry_max_delay_seconds,
                RetryBackoffType::Fixed,
            ),
            None,
        );
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .int_err()?;

        let report = self.delivery_worker.execute_attempt(delivery_id).await?;
        let Some(outcome) = report.outcome else {
            // The endpoint vanished between the lookup above and the attempt
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        };

        tracing::info!(
            %delivery_id,
            success = outcome.is_success(),
            "Webhook endpoint ping finished",
        );

        Ok(PingWebhookEndpointResult {
            delivery_id,
            outcome,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
