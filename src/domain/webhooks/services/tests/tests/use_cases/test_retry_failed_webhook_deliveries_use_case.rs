// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use assert_matches::assert_matches;
use dill::CatalogBuilder;
use folio_webhooks::*;
use folio_webhooks_inmem::InMemoryWebhookDeliveryEventStore;
use folio_webhooks_services::{RetryFailedWebhookDeliveriesUseCaseImpl, WebhookDeliveryQueueImpl};

use super::{WebhookEndpointUseCaseHarness, t0};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_failed_deliveries_are_reissued_and_queued() {
    let harness = RetryFailedWebhookDeliveriesUseCaseHarness::new();
    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;

    let failed_delivery_1 = harness.create_failed_delivery(endpoint.endpoint_id).await;
    let failed_delivery_2 = harness.create_failed_delivery(endpoint.endpoint_id).await;
    let sent_delivery = harness.create_sent_delivery(endpoint.endpoint_id).await;
    let pending_delivery = harness.create_pending_delivery(endpoint.endpoint_id).await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert!(res.is_ok(), "Failed to retry deliveries: {res:?}",);
    let retry_ids = res.unwrap().delivery_ids;
    assert_eq!(retry_ids.len(), 2);

    // Each retry is a fresh pending delivery of the same stored event,
    // pointing back at its failed original, oldest original first
    for (retry_id, original_id) in retry_ids
        .iter()
        .zip([failed_delivery_1, failed_delivery_2])
    {
        let retry = harness.get_delivery(*retry_id).await;
        let original = harness.get_delivery(original_id).await;

        assert_eq!(retry.status(), WebhookDeliveryStatus::Pending);
        assert_eq!(retry.attempt_count(), 0);
        assert_eq!(retry.retry_of, Some(original_id));
        assert_eq!(retry.webhook_event_id, original.webhook_event_id);
        assert_eq!(retry.event_type, original.event_type);

        // The failed original is terminal and stays exactly as it was
        assert_eq!(original.status(), WebhookDeliveryStatus::Failed);
        assert_eq!(original.attempt_count(), 1);
    }

    // The retries are queued for the agent to pick up
    assert!(!harness.delivery_queue.is_idle());
    let first_taken = harness.delivery_queue.take_next_ready(t0()).unwrap();
    assert_eq!(first_taken.delivery_id, retry_ids[0]);

    // Deliveries that did not fail are left alone
    let sent = harness.get_delivery(sent_delivery).await;
    assert_eq!(sent.status(), WebhookDeliveryStatus::Sent);
    let pending = harness.get_delivery(pending_delivery).await;
    assert_eq!(pending.status(), WebhookDeliveryStatus::Pending);
    assert_eq!(pending.retry_of, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_retries_take_the_endpoints_current_settings() {
    let harness = RetryFailedWebhookDeliveriesUseCaseHarness::new();
    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;

    let _failed_delivery = harness.create_failed_delivery(endpoint.endpoint_id).await;

    // The endpoint's retry budget changed since the original delivery
    harness
        .set_endpoint_max_retries(endpoint.endpoint_id, 5)
        .await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert!(res.is_ok(), "Failed to retry deliveries: {res:?}",);
    let retry_ids = res.unwrap().delivery_ids;
    assert_eq!(retry_ids.len(), 1);

    let retry = harness.get_delivery(retry_ids[0]).await;
    assert_eq!(
        retry.retry_policy,
        RetryPolicy::new(
            5,
            DEFAULT_WEBHOOK_RETRY_MIN_DELAY_SECONDS,
            DEFAULT_WEBHOOK_RETRY_MAX_DELAY_SECONDS,
            RetryBackoffType::ExponentialWithJitter,
        )
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_endpoint_without_failures_is_a_noop() {
    let harness = RetryFailedWebhookDeliveriesUseCaseHarness::new();
    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;

    let _sent_delivery = harness.create_sent_delivery(endpoint.endpoint_id).await;
    let _pending_delivery = harness.create_pending_delivery(endpoint.endpoint_id).await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert!(res.is_ok(), "Failed to retry deliveries: {res:?}",);
    assert_eq!(res.unwrap().delivery_ids, vec![]);

    assert!(harness.delivery_queue.is_idle());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_paused_endpoint_can_drain_its_backlog() {
    let harness = RetryFailedWebhookDeliveriesUseCaseHarness::new();

    // Operators typically retry after fixing the receiver, before resuming
    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;
    let _failed_delivery = harness.create_failed_delivery(endpoint.endpoint_id).await;
    harness.pause_endpoint(endpoint.endpoint_id).await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert!(res.is_ok(), "Failed to retry deliveries: {res:?}",);
    assert_eq!(res.unwrap().delivery_ids.len(), 1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_retry_not_found() {
    let harness = RetryFailedWebhookDeliveriesUseCaseHarness::new();

    let unknown_endpoint_id = WebhookEndpointID::new_generated();
    let res = harness.use_case.execute(unknown_endpoint_id).await;
    assert_matches!(
        res,
        Err(RetryFailedWebhookDeliveriesError::NotFound(e))
            if e.endpoint_id == unknown_endpoint_id
    );

    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;
    harness.remove_endpoint(endpoint.endpoint_id).await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert_matches!(res, Err(RetryFailedWebhookDeliveriesError::NotFound(_)));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[oop::extend(WebhookEndpointUseCaseHarness, base_harness)]
struct RetryFailedWebhookDeliveriesUseCaseHarness {
    base_harness: WebhookEndpointUseCaseHarness,
    use_case: Arc<dyn RetryFailedWebhookDeliveriesUseCase>,
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    delivery_queue: Arc<dyn WebhookDeliveryQueue>,
}

impl RetryFailedWebhookDeliveriesUseCaseHarness {
    fn new() -> Self {
        let base_harness = WebhookEndpointUseCaseHarness::new();

        let mut b = CatalogBuilder::new_chained(base_harness.catalog());
        b.add::<RetryFailedWebhookDeliveriesUseCaseImpl>();
        b.add::<WebhookDeliveryQueueImpl>();
        b.add::<InMemoryWebhookDeliveryEventStore>();

        let catalog = b.build();

        Self {
            base_harness,
            use_case: catalog.get_one().unwrap(),
            endpoint_event_store: catalog.get_one().unwrap(),
            delivery_event_store: catalog.get_one().unwrap(),
            delivery_queue: catalog.get_one().unwrap(),
        }
    }

    async fn set_endpoint_max_retries(&self, endpoint_id: WebhookEndpointID, max_retries: u32) {
        let mut endpoint = WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref())
            .await
            .unwrap();
        endpoint
            .modify(t0(), None, None, None, None, Some(max_retries))
            .unwrap();
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .unwrap();
    }

    async fn create_pending_delivery(&self, endpoint_id: WebhookEndpointID) -> WebhookDeliveryID {
        let delivery_id = WebhookDeliveryID::new_generated();
        let mut delivery = WebhookDelivery::new(
            t0(),
            delivery_id,
            DeliveryChannel::Webhook { endpoint_id },
            WebhookEventID::new_generated(),
            WebhookEventTypeCatalog::invoice_paid(),
            RetryPolicy::new(1, 30, 3600, RetryBackoffType::ExponentialWithJitter),
            None,
        );
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery_id
    }

    async fn create_sent_delivery(&self, endpoint_id: WebhookEndpointID) -> WebhookDeliveryID {
        let delivery_id = self.create_pending_delivery(endpoint_id).await;
        let mut delivery = WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery.start_attempt(t0()).unwrap();
        delivery
            .finish_attempt(
                t0(),
                WebhookDeliveryAttemptOutcome::Success(WebhookAttemptResponse {
                    http_status_code: 200,
                    response_time_ms: 5,
                }),
            )
            .unwrap();
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery_id
    }

    async fn create_failed_delivery(&self, endpoint_id: WebhookEndpointID) -> WebhookDeliveryID {
        // A single-attempt policy makes one failure terminal
        let delivery_id = self.create_pending_delivery(endpoint_id).await;
        let mut delivery = WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery.start_attempt(t0()).unwrap();
        delivery
            .finish_attempt(
                t0(),
                WebhookDeliveryAttemptOutcome::Failure(WebhookAttemptFailure {
                    http_status_code: Some(500),
                    response_time_ms: Some(5),
                    error_message: "Received status 500".to_string(),
                }),
            )
            .unwrap();
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery_id
    }

    async fn get_delivery(&self, delivery_id: WebhookDeliveryID) -> WebhookDeliveryState {
        WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .unwrap()
            .into_state()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
