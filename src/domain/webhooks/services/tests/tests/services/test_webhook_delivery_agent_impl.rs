// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use folio_time_source::{SystemTimeSource, SystemTimeSourceStub};
use folio_webhooks::testing::MockWebhookSender;
use folio_webhooks::*;
use folio_webhooks_inmem::{
    InMemoryWebhookDeliveryEventStore,
    InMemoryWebhookEndpointEventStore,
    InMemoryWebhookEndpointHealthRepository,
    InMemoryWebhookEventRepository,
};
use folio_webhooks_services::*;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_run_until_idle_drains_ready_deliveries() {
    let endpoint_1 = WebhookEndpointID::new_generated();
    let endpoint_2 = WebhookEndpointID::new_generated();
    let delivery_1 = WebhookDeliveryID::new_generated();
    let delivery_2 = WebhookDeliveryID::new_generated();

    let mut mock_webhook_sender = MockWebhookSender::new();
    TestWebhookDeliveryAgentHarness::add_success_sender_expectation(&mut mock_webhook_sender, 2);

    let harness = TestWebhookDeliveryAgentHarness::new(mock_webhook_sender);
    harness.create_endpoint(endpoint_1, 3).await;
    harness.create_endpoint(endpoint_2, 3).await;
    harness.create_delivery(delivery_1, endpoint_1).await;
    harness.create_delivery(delivery_2, endpoint_2).await;

    harness.delivery_queue.enqueue(delivery_1, endpoint_1);
    harness.delivery_queue.enqueue(delivery_2, endpoint_2);

    let res = harness.delivery_agent.run_until_idle().await;
    assert!(res.is_ok(), "Failed to run until idle: {res:?}",);
    assert_eq!(res.unwrap(), 2);

    assert_eq!(
        harness.get_delivery_status(delivery_1).await,
        WebhookDeliveryStatus::Sent
    );
    assert_eq!(
        harness.get_delivery_status(delivery_2).await,
        WebhookDeliveryStatus::Sent
    );
    assert!(harness.delivery_queue.is_idle());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_failing_delivery_is_retried_after_backoff() {
    let endpoint_id = WebhookEndpointID::new_generated();
    let delivery_id = WebhookDeliveryID::new_generated();

    let mut mock_webhook_sender = MockWebhookSender::new();
    TestWebhookDeliveryAgentHarness::add_timeout_sender_expectation(&mut mock_webhook_sender, 2);

    let harness = TestWebhookDeliveryAgentHarness::new(mock_webhook_sender);
    harness.create_endpoint(endpoint_id, 2).await;
    harness.create_delivery(delivery_id, endpoint_id).await;

    harness.delivery_queue.enqueue(delivery_id, endpoint_id);

    // First pass: the attempt fails and a retry lands back in the queue
    assert_eq!(harness.delivery_agent.run_until_idle().await.unwrap(), 1);
    assert_eq!(
        harness.get_delivery_status(delivery_id).await,
        WebhookDeliveryStatus::Retrying
    );
    assert!(!harness.delivery_queue.is_idle());

    // The retry is not due yet, so another pass does nothing
    assert_eq!(harness.delivery_agent.run_until_idle().await.unwrap(), 0);
    assert_eq!(
        harness.get_delivery_status(delivery_id).await,
        WebhookDeliveryStatus::Retrying
    );

    // Past the jittered backoff (30s +-20%) the retry runs and, with the
    // attempts exhausted, the delivery fails for good
    harness
        .system_time_source_stub
        .advance(chrono::Duration::seconds(40));
    assert_eq!(harness.delivery_agent.run_until_idle().await.unwrap(), 1);

    let delivery = harness.get_delivery(delivery_id).await;
    assert_eq!(delivery.status(), WebhookDeliveryStatus::Failed);
    assert_eq!(delivery.attempt_count(), 2);
    assert_eq!(delivery.timing.next_attempt_at, None);
    assert!(harness.delivery_queue.is_idle());

    let health = harness
        .health_repository
        .get_health(endpoint_id)
        .await
        .unwrap();
    assert_eq!(health.success_count, 0);
    assert_eq!(health.failure_count, 1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_same_endpoint_deliveries_execute_in_order() {
    let endpoint_id = WebhookEndpointID::new_generated();
    let delivery_1 = WebhookDeliveryID::new_generated();
    let delivery_2 = WebhookDeliveryID::new_generated();
    let delivery_3 = WebhookDeliveryID::new_generated();

    let mut mock_webhook_sender = MockWebhookSender::new();
    let observed_order = TestWebhookDeliveryAgentHarness::add_order_capturing_sender_expectation(
        &mut mock_webhook_sender,
        3,
    );

    let harness = TestWebhookDeliveryAgentHarness::new(mock_webhook_sender);
    harness.create_endpoint(endpoint_id, 3).await;
    harness.create_delivery(delivery_1, endpoint_id).await;
    harness.create_delivery(delivery_2, endpoint_id).await;
    harness.create_delivery(delivery_3, endpoint_id).await;

    harness.delivery_queue.enqueue(delivery_1, endpoint_id);
    harness.delivery_queue.enqueue(delivery_2, endpoint_id);
    harness.delivery_queue.enqueue(delivery_3, endpoint_id);

    assert_eq!(harness.delivery_agent.run_until_idle().await.unwrap(), 3);

    assert_eq!(
        *observed_order.lock().unwrap(),
        vec![
            delivery_1.to_string(),
            delivery_2.to_string(),
            delivery_3.to_string(),
        ],
    );

    for delivery_id in [delivery_1, delivery_2, delivery_3] {
        assert_eq!(
            harness.get_delivery_status(delivery_id).await,
            WebhookDeliveryStatus::Sent
        );
    }
    assert!(harness.delivery_queue.is_idle());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct TestWebhookDeliveryAgentHarness {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    webhook_event_repository: Arc<dyn WebhookEventRepository>,
    health_repository: Arc<dyn WebhookEndpointHealthRepository>,
    delivery_queue: Arc<dyn WebhookDeliveryQueue>,
    delivery_agent: Arc<dyn WebhookDeliveryAgent>,
    system_time_source_stub: SystemTimeSourceStub,
}

impl TestWebhookDeliveryAgentHarness {
    fn new(mock_sender: MockWebhookSender) -> Self {
        let system_time_source_stub = SystemTimeSourceStub::new_set(t0());

        let mut b = dill::CatalogBuilder::new();
        b.add::<WebhookDeliveryAgentImpl>()
            .add::<WebhookDeliveryQueueImpl>()
            .add::<WebhookDeliveryWorkerImpl>()
            .add::<WebhookSignerImpl>()
            .add::<WebhookHealthAggregatorImpl>()
            .add_value(WebhooksConfig::default())
            .add_value(mock_sender)
            .bind::<dyn WebhookSender, MockWebhookSender>()
            .add_value(system_time_source_stub.clone())
            .bind::<dyn SystemTimeSource, SystemTimeSourceStub>()
            .add::<InMemoryWebhookEndpointEventStore>()
            .add::<InMemoryWebhookDeliveryEventStore>()
            .add::<InMemoryWebhookEventRepository>()
            .add::<InMemoryWebhookEndpointHealthRepository>();

        let catalog = b.build();

        Self {
            endpoint_event_store: catalog.get_one().unwrap(),
            delivery_event_store: catalog.get_one().unwrap(),
            webhook_event_repository: catalog.get_one().unwrap(),
            health_repository: catalog.get_one().unwrap(),
            delivery_queue: catalog.get_one().unwrap(),
            delivery_agent: catalog.get_one().unwrap(),
            system_time_source_stub,
        }
    }

    async fn create_endpoint(&self, endpoint_id: WebhookEndpointID, max_retries: u32) {
        let mut endpoint = WebhookEndpoint::new(
            self.system_time_source_stub.now(),
            endpoint_id,
            TenantID::new_generated(),
            WebhookEndpointName::try_new(format!("hook-{endpoint_id}")).unwrap(),
            Url::parse("https://example.com/webhook").unwrap(),
            vec![WebhookEventTypeCatalog::invoice_paid()],
            WebhookEndpointSecret::try_new("whsec_test_secret").unwrap(),
            10,
            max_retries,
        );
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .unwrap();
    }

    async fn create_delivery(
        &self,
        delivery_id: WebhookDeliveryID,
        endpoint_id: WebhookEndpointID,
    ) {
        let now = self.system_time_source_stub.now();
        let endpoint = WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref())
            .await
            .unwrap();

        let event_id = WebhookEventID::new_generated();
        let event = WebhookEvent::new(
            event_id,
            endpoint.tenant_id,
            WebhookEventTypeCatalog::invoice_paid(),
            serde_json::json!({"invoice_id": "INV-0042", "status": "paid"}),
            now,
        );
        self.webhook_event_repository
            .create_event(&event)
            .await
            .unwrap();

        let mut delivery = WebhookDelivery::new(
            now,
            delivery_id,
            DeliveryChannel::Webhook { endpoint_id },
            event_id,
            WebhookEventTypeCatalog::invoice_paid(),
            RetryPolicy::new(
                endpoint.max_retries,
                30,
                3600,
                RetryBackoffType::ExponentialWithJitter,
            ),
            None,
        );
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .unwrap();
    }

    async fn get_delivery(&self, delivery_id: WebhookDeliveryID) -> WebhookDeliveryState {
        WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .unwrap()
            .into_state()
    }

    async fn get_delivery_status(&self, delivery_id: WebhookDeliveryID) -> WebhookDeliveryStatus {
        self.get_delivery(delivery_id).await.status()
    }

    fn add_success_sender_expectation(
        mock_webhook_sender: &mut MockWebhookSender,
        times: usize,
    ) {
        mock_webhook_sender
            .expect_send_webhook()
            .times(times)
            .returning(|_, _, _, _| {
                Ok(WebhookResponse::new(
                    http::StatusCode::OK,
                    http::HeaderMap::new(),
                    "OK".to_string(),
                    t0(),
                ))
            });
    }

    fn add_timeout_sender_expectation(mock_webhook_sender: &mut MockWebhookSender, times: usize) {
        mock_webhook_sender
            .expect_send_webhook()
            .times(times)
            .returning(|target_url, _, _, _| {
                Err(WebhookSendError::ConnectionTimeout(
                    WebhookSendConnectionTimeoutError {
                        target_url,
                        timeout: std::time::Duration::from_secs(10),
                    },
                ))
            });
    }

    /// Returns the delivery ids in the order the sender saw them
    fn add_order_capturing_sender_expectation(
        mock_webhook_sender: &mut MockWebhookSender,
        times: usize,
    ) -> Arc<Mutex<Vec<String>>> {
        let observed_order = Arc::new(Mutex::new(Vec::new()));

        let observed = observed_order.clone();
        mock_webhook_sender
            .expect_send_webhook()
            .times(times)
            .withf(move |_, _, headers, _| {
                let delivery_id = headers
                    .get(HEADER_WEBHOOK_DELIVERY_ID)
                    .map(|h| h.to_str().unwrap())
                    .unwrap();
                observed.lock().unwrap().push(delivery_id.to_string());
                true
            })
            .returning(|_, _, _, _| {
                Ok(WebhookResponse::new(
                    http::StatusCode::OK,
                    http::HeaderMap::new(),
                    "OK".to_string(),
                    t0(),
                ))
            });

        observed_order
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
