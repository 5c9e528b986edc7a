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
#[interface(dyn WebhookDispatcher)]
pub struct WebhookDispatcherImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    webhook_event_repository: Arc<dyn WebhookEventRepository>,
    delivery_queue: Arc<dyn WebhookDeliveryQueue>,
    webhooks_config: Arc<WebhooksConfig>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookDispatcher for WebhookDispatcherImpl {
    #[tracing::instrument(
        level = "info",
        name = "WebhookDispatcherImpl::dispatch_event",
        skip_all,
        fields(%tenant_id, %event_type),
    )]
    async fn dispatch_event(
        &self,
        tenant_id: TenantID,
        event_type: WebhookEventType,
        payload: serde_json::Value,
    ) -> Result<Option<WebhookEventDispatch>, InternalError> {
        let endpoint_ids = self
            .endpoint_event_store
            .list_enabled_endpoint_ids_by_tenant_and_event_type(tenant_id, &event_type)
            .await
            .map_err(|e| match e {
                ListWebhookEndpointsError::Internal(e) => e,
            })?;

        if endpoint_ids.is_empty() {
            // No matching endpoint, so not even the event is recorded
            tracing::debug!("No webhook endpoints matched the event, skipping");
            return Ok(None);
        }

        let endpoints =
            WebhookEndpoint::load_multi(endpoint_ids, self.endpoint_event_store.as_ref())
                .await
                .map_err(|e| match e {
                    GetEventsError::Internal(e) => e,
                })?;

        let now = self.time_source.now();

        // One event record shared by every delivery, so all endpoints and all
        // retries observe the identical payload
        let webhook_event_id = WebhookEventID::new_generated();
        let webhook_event =
            WebhookEvent::new(webhook_event_id, tenant_id, event_type.clone(), payload, now);
        self.webhook_event_repository
            .create_event(&webhook_event)
            .await
            .map_err(|e| match e {
                CreateWebhookEventError::DuplicateId(e) => e.int_err(),
                CreateWebhookEventError::Internal(e) => e,
            })?;

        let mut delivery_ids = Vec::with_capacity(endpoints.len());
        for endpoint_res in endpoints {
            let endpoint = match endpoint_res {
                Ok(endpoint) => endpoint,
                // Endpoint disappeared between the fan-out query and now
                Err(LoadError::NotFound(_)) => continue,
                Err(LoadError::ProjectionError(e)) => return Err(e.int_err()),
                Err(LoadError::Internal(e)) => return Err(e),
            };

            let delivery_id = WebhookDeliveryID::new_generated();
            let mut delivery = WebhookDelivery::new(
                now,
                delivery_id,
                DeliveryChannel::Webhook {
                    endpoint_id: endpoint.endpoint_id,
                },
                webhook_event_id,
                event_type.clone(),
                RetryPolicy::new(
                    endpoint.max_retries,
                    self.webhooks_config.retry_min_delay_seconds,
                    self.webhooks_config.retry_max_delay_seconds,
                    RetryBackoffType::ExponentialWithJitter,
                ),
                None,
            );
            delivery
                .save(self.delivery_event_store.as_ref())
                .await
                .int_err()?;

            self.delivery_queue.enqueue(delivery_id, endpoint.endpoint_id);
            delivery_ids.push(delivery_id);
        }

        tracing::info!(
            %webhook_event_id,
            num_deliveries = delivery_ids.len(),
            "Webhook event dispatched",
        );

        Ok(Some(WebhookEventDispatch {
            webhook_event_id,
            delivery_ids,
        }))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
