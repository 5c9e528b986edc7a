// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_time_source::{SystemTimeSource, SystemTimeSourceStub};
use folio_webhooks::*;
use folio_webhooks_inmem::{
    InMemoryWebhookDeliveryEventStore,
    InMemoryWebhookEndpointEventStore,
    InMemoryWebhookEndpointHealthRepository,
};
use folio_webhooks_services::*;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_listing_shows_only_the_tenants_live_endpoints() {
    let harness = TestWebhookQueryServicesHarness::new();

    let tenant_id = TenantID::new_generated();
    let other_tenant_id = TenantID::new_generated();

    let endpoint_a = harness.create_endpoint(tenant_id, "hook-a").await;
    let endpoint_b = harness.create_endpoint(tenant_id, "hook-b").await;
    let endpoint_c = harness.create_endpoint(tenant_id, "hook-c").await;
    harness.create_endpoint(other_tenant_id, "hook-d").await;

    harness.remove_endpoint(endpoint_b).await;

    let listing = harness
        .endpoint_query_service
        .list_endpoints_by_tenant(tenant_id, PaginationOpts::all())
        .await
        .unwrap();

    assert_eq!(listing.total_count, 2);
    assert_eq!(
        listing
            .endpoints
            .iter()
            .map(|e| e.endpoint_id)
            .collect::<Vec<_>>(),
        vec![endpoint_a, endpoint_c],
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_listing_paginates_in_creation_order() {
    let harness = TestWebhookQueryServicesHarness::new();

    let tenant_id = TenantID::new_generated();
    let endpoint_a = harness.create_endpoint(tenant_id, "hook-a").await;
    let endpoint_b = harness.create_endpoint(tenant_id, "hook-b").await;
    let endpoint_c = harness.create_endpoint(tenant_id, "hook-c").await;

    let first_page = harness
        .endpoint_query_service
        .list_endpoints_by_tenant(tenant_id, PaginationOpts::from_page(0, 2))
        .await
        .unwrap();
    assert_eq!(first_page.total_count, 3);
    assert_eq!(
        first_page
            .endpoints
            .iter()
            .map(|e| e.endpoint_id)
            .collect::<Vec<_>>(),
        vec![endpoint_a, endpoint_b],
    );

    let second_page = harness
        .endpoint_query_service
        .list_endpoints_by_tenant(tenant_id, PaginationOpts::from_page(1, 2))
        .await
        .unwrap();
    assert_eq!(second_page.total_count, 3);
    assert_eq!(
        second_page
            .endpoints
            .iter()
            .map(|e| e.endpoint_id)
            .collect::<Vec<_>>(),
        vec![endpoint_c],
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_find_endpoint_hides_removed() {
    let harness = TestWebhookQueryServicesHarness::new();

    let tenant_id = TenantID::new_generated();
    let endpoint_id = harness.create_endpoint(tenant_id, "hook-a").await;

    let endpoint = harness
        .endpoint_query_service
        .find_endpoint(endpoint_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(endpoint.endpoint_id, endpoint_id);
    assert_eq!(
        endpoint.endpoint_name,
        WebhookEndpointName::try_new("hook-a").unwrap()
    );
    assert!(endpoint.is_active());

    harness.remove_endpoint(endpoint_id).await;
    assert_eq!(
        harness
            .endpoint_query_service
            .find_endpoint(endpoint_id)
            .await
            .unwrap(),
        None,
    );

    assert_eq!(
        harness
            .endpoint_query_service
            .find_endpoint(WebhookEndpointID::new_generated())
            .await
            .unwrap(),
        None,
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_endpoint_overview_attaches_health() {
    let harness = TestWebhookQueryServicesHarness::new();

    let tenant_id = TenantID::new_generated();
    let endpoint_id = harness.create_endpoint(tenant_id, "hook-a").await;

    for _ in 0..9 {
        harness
            .health_aggregator
            .record_outcome(endpoint_id, true)
            .await
            .unwrap();
    }
    harness
        .health_aggregator
        .record_outcome(endpoint_id, false)
        .await
        .unwrap();

    let overview = harness
        .endpoint_query_service
        .get_endpoint_overview(endpoint_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(overview.endpoint_id, endpoint_id);
    assert_eq!(
        overview.endpoint_name,
        WebhookEndpointName::try_new("hook-a").unwrap()
    );
    assert_eq!(
        overview.target_url,
        Url::parse("https://example.com/webhook").unwrap()
    );
    assert!(overview.is_active);
    assert_eq!(overview.timeout_seconds, 10);
    assert_eq!(overview.max_retries, 3);
    assert_eq!(overview.created_at, t0());

    assert_eq!(overview.health.record.success_count, 9);
    assert_eq!(overview.health.record.failure_count, 1);
    assert!((overview.health.success_rate - 0.9).abs() < f64::EPSILON);
    assert_eq!(overview.health.status, WebhookEndpointHealthStatus::Good);

    // A paused endpoint still has an overview, marked inactive
    harness.pause_endpoint(endpoint_id).await;
    let overview = harness
        .endpoint_query_service
        .get_endpoint_overview(endpoint_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!overview.is_active);

    assert!(
        harness
            .endpoint_query_service
            .get_endpoint_overview(WebhookEndpointID::new_generated())
            .await
            .unwrap()
            .is_none()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_get_delivery_returns_current_state() {
    let harness = TestWebhookQueryServicesHarness::new();

    let tenant_id = TenantID::new_generated();
    let endpoint_id = harness.create_endpoint(tenant_id, "hook-a").await;
    let delivery_id = harness.create_delivery(endpoint_id).await;

    let delivery = harness
        .delivery_query_service
        .get_delivery(delivery_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(delivery.delivery_id, delivery_id);
    assert_eq!(delivery.status(), WebhookDeliveryStatus::Pending);
    assert_eq!(delivery.attempt_count(), 0);

    assert!(
        harness
            .delivery_query_service
            .get_delivery(WebhookDeliveryID::new_generated())
            .await
            .unwrap()
            .is_none()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delivery_history_is_newest_first_and_filterable() {
    let harness = TestWebhookQueryServicesHarness::new();

    let tenant_id = TenantID::new_generated();
    let endpoint_id = harness.create_endpoint(tenant_id, "hook-a").await;

    let failed_delivery = harness.create_delivery(endpoint_id).await;
    harness.make_delivery_failed(failed_delivery).await;

    let sent_delivery = harness.create_delivery(endpoint_id).await;
    harness.make_delivery_sent(sent_delivery).await;

    let pending_delivery = harness.create_delivery(endpoint_id).await;

    let listing = harness
        .delivery_query_service
        .list_deliveries_by_endpoint(
            endpoint_id,
            &WebhookDeliveryFilters::default(),
            PaginationOpts::all(),
        )
        .await
        .unwrap();
    assert_eq!(listing.total_count, 3);
    assert_eq!(
        listing
            .deliveries
            .iter()
            .map(|d| d.delivery_id)
            .collect::<Vec<_>>(),
        vec![pending_delivery, sent_delivery, failed_delivery],
    );

    let failed_only = harness
        .delivery_query_service
        .list_deliveries_by_endpoint(
            endpoint_id,
            &WebhookDeliveryFilters {
                by_status: Some(WebhookDeliveryStatus::Failed),
                ..Default::default()
            },
            PaginationOpts::all(),
        )
        .await
        .unwrap();
    assert_eq!(failed_only.total_count, 1);
    assert_eq!(failed_only.deliveries[0].delivery_id, failed_delivery);

    let first_page = harness
        .delivery_query_service
        .list_deliveries_by_endpoint(
            endpoint_id,
            &WebhookDeliveryFilters::default(),
            PaginationOpts::from_page(0, 1),
        )
        .await
        .unwrap();
    assert_eq!(first_page.total_count, 3);
    assert_eq!(first_page.deliveries.len(), 1);
    assert_eq!(first_page.deliveries[0].delivery_id, pending_delivery);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct TestWebhookQueryServicesHarness {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    health_aggregator: Arc<dyn WebhookHealthAggregator>,
    endpoint_query_service: Arc<dyn WebhookEndpointQueryService>,
    delivery_query_service: Arc<dyn WebhookDeliveryQueryService>,
    system_time_source_stub: SystemTimeSourceStub,
}

impl TestWebhookQueryServicesHarness {
    fn new() -> Self {
        let system_time_source_stub = SystemTimeSourceStub::new_set(t0());

        let mut b = dill::CatalogBuilder::new();
        b.add::<WebhookEndpointQueryServiceImpl>()
            .add::<WebhookDeliveryQueryServiceImpl>()
            .add::<WebhookHealthAggregatorImpl>()
            .add_value(WebhooksConfig::default())
            .add_value(system_time_source_stub.clone())
            .bind::<dyn SystemTimeSource, SystemTimeSourceStub>()
            .add::<InMemoryWebhookEndpointEventStore>()
            .add::<InMemoryWebhookDeliveryEventStore>()
            .add::<InMemoryWebhookEndpointHealthRepository>();

        let catalog = b.build();

        Self {
            endpoint_event_store: catalog.get_one().unwrap(),
            delivery_event_store: catalog.get_one().unwrap(),
            health_aggregator: catalog.get_one().unwrap(),
            endpoint_query_service: catalog.get_one().unwrap(),
            delivery_query_service: catalog.get_one().unwrap(),
            system_time_source_stub,
        }
    }

    async fn create_endpoint(&self, tenant_id: TenantID, name: &str) -> WebhookEndpointID {
        let endpoint_id = WebhookEndpointID::new_generated();
        let mut endpoint = WebhookEndpoint::new(
            self.system_time_source_stub.now(),
            endpoint_id,
            tenant_id,
            WebhookEndpointName::try_new(name).unwrap(),
            Url::parse("https://example.com/webhook").unwrap(),
            vec![WebhookEventTypeCatalog::invoice_paid()],
            WebhookEndpointSecret::try_new("whsec_test_secret").unwrap(),
            10,
            3,
        );
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .unwrap();
        endpoint_id
    }

    async fn pause_endpoint(&self, endpoint_id: WebhookEndpointID) {
        let mut endpoint = WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref())
            .await
            .unwrap();
        endpoint.pause(self.system_time_source_stub.now()).unwrap();
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .unwrap();
    }

    async fn remove_endpoint(&self, endpoint_id: WebhookEndpointID) {
        let mut endpoint = WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref())
            .await
            .unwrap();
        endpoint.remove(self.system_time_source_stub.now()).unwrap();
        endpoint
            .save(self.endpoint_event_store.as_ref())
            .await
            .unwrap();
    }

    async fn create_delivery(&self, endpoint_id: WebhookEndpointID) -> WebhookDeliveryID {
        let delivery_id = WebhookDeliveryID::new_generated();
        let mut delivery = WebhookDelivery::new(
            self.system_time_source_stub.now(),
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

    async fn make_delivery_sent(&self, delivery_id: WebhookDeliveryID) {
        let now = self.system_time_source_stub.now();
        let mut delivery = WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery.start_attempt(now).unwrap();
        delivery
            .finish_attempt(
                now,
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
    }

    async fn make_delivery_failed(&self, delivery_id: WebhookDeliveryID) {
        let now = self.system_time_source_stub.now();
        let mut delivery = WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .unwrap();
        delivery.start_attempt(now).unwrap();
        delivery
            .finish_attempt(
                now,
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
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
