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
#[interface(dyn RetryFailedWebhookDeliveriesUseCase)]
pub struct RetryFailedWebhookDeliveriesUseCaseImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    delivery_queue: Arc<dyn WebhookDeliveryQueue>,
    webhooks_config: Arc<WebhooksConfig>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl RetryFailedWebhookDeliveriesUseCase for RetryFailedWebhookDeliveriesUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "RetryFailedWebhookDeliveriesUseCaseImpl::execute",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn execute(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<RetryFailedWebhookDeliveriesResult, RetryFailedWebhookDeliveriesError> {
        // Paused endpoints can drain their backlog: operators typically retry
        // after fixing the receiver, before resuming new traffic
        let endpoint =
            WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await?;
        if endpoint.is_removed() {
            return Err(WebhookEndpointNotFoundError { endpoint_id }.into());
        }

        let failed_delivery_ids = self
            .delivery_event_store
            .list_failed_delivery_ids_by_endpoint(endpoint_id)
            .await
            .map_err(|e| match e {
                ListWebhookDeliveriesError::Internal(e) => e,
            })?;

        let now = self.time_source.now();

        // Fresh deliveries take the endpoint's current retry settings, not
        // the ones the failed originals were created with
        let retry_policy = RetryPolicy::new(
            endpoint.max_retries,
            self.webhooks_config.retry_min_delay_seconds,
            self.webhooks_config.retry_max_delay_seconds,
            RetryBackoffType::ExponentialWithJitter,
        );

        let mut delivery_ids = Vec::with_capacity(failed_delivery_ids.len());
        for failed_delivery_id in failed_delivery_ids {
            let failed_delivery =
                WebhookDelivery::load(failed_delivery_id, self.delivery_event_store.as_ref())
                    .await
                    .int_err()?;

            // The failed record stays untouched; the retry is a new delivery
            // of the same stored event, pointing back at the original
            let delivery_id = WebhookDeliveryID::new_generated();
            let mut delivery = WebhookDelivery::new(
                now,
                delivery_id,
                failed_delivery.channel,
                failed_delivery.webhook_event_id,
                failed_delivery.event_type.clone(),
                retry_policy,
                Some(failed_delivery_id),
            );
            delivery
                .save(self.delivery_event_store.as_ref())
                .await
                .int_err()?;

            self.delivery_queue.enqueue(delivery_id, endpoint_id);
            delivery_ids.push(delivery_id);
        }

        tracing::info!(
            num_deliveries = delivery_ids.len(),
            "Failed webhook deliveries queued for retry",
        );

        Ok(RetryFailedWebhookDeliveriesResult { delivery_ids })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
