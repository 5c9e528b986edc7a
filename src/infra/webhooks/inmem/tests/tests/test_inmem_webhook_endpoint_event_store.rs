// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use assert_matches::assert_matches;
use chrono::Utc;
use folio_event_sourcing::SaveEventsError;
use folio_webhooks_inmem::domain::*;
use folio_webhooks_inmem::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_list_and_count_by_tenant() {
    let event_store = InMemoryWebhookEndpointEventStore::new();
    let tenant_id = TenantID::new_generated();
    let other_tenant_id = TenantID::new_generated();

    let first_id = save_endpoint(&event_store, tenant_id, "billing-hooks").await;
    let second_id = save_endpoint(&event_store, tenant_id, "crm-sync").await;
    save_endpoint(&event_store, other_tenant_id, "billing-hooks").await;

    let ids = event_store
        .list_endpoint_ids_by_tenant(tenant_id, PaginationOpts::all())
        .await
        .unwrap();
    assert_eq!(ids, [first_id, second_id]);

    let count = event_store
        .count_endpoints_by_tenant(tenant_id)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let page = event_store
        .list_endpoint_ids_by_tenant(
            tenant_id,
            PaginationOpts {
                offset: 1,
                limit: 1,
            },
        )
        .await
        .unwrap();
    assert_eq!(page, [second_id]);
}

#[test_log::test(tokio::test)]
async fn test_find_endpoint_by_tenant_and_name() {
    let event_store = InMemoryWebhookEndpointEventStore::new();
    let tenant_id = TenantID::new_generated();

    let endpoint_id = save_endpoint(&event_store, tenant_id, "billing-hooks").await;

    let found = event_store
        .find_endpoint_id_by_tenant_and_name(
            tenant_id,
            &WebhookEndpointName::try_new("billing-hooks").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(found, Some(endpoint_id));

    let missing = event_store
        .find_endpoint_id_by_tenant_and_name(
            tenant_id,
            &WebhookEndpointName::try_new("no-such-endpoint").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing, None);

    // Names live in tenant-local namespaces
    let foreign = event_store
        .find_endpoint_id_by_tenant_and_name(
            TenantID::new_generated(),
            &WebhookEndpointName::try_new("billing-hooks").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(foreign, None);
}

#[test_log::test(tokio::test)]
async fn test_fan_out_query_skips_paused_and_unsubscribed() {
    let event_store = InMemoryWebhookEndpointEventStore::new();
    let tenant_id = TenantID::new_generated();
    let invoice_paid = WebhookEventTypeCatalog::invoice_paid();

    let subscribed_id = save_endpoint(&event_store, tenant_id, "billing-hooks").await;

    // Subscribed to a different event type
    let mut unsubscribed = make_endpoint(tenant_id, "crm-sync");
    unsubscribed
        .modify(
            Utc::now(),
            None,
            None,
            Some(vec![WebhookEventTypeCatalog::lead_status_changed()]),
            None,
            None,
        )
        .unwrap();
    unsubscribed.save(&event_store).await.unwrap();

    // Subscribed but paused
    let mut paused = make_endpoint(tenant_id, "staging-hooks");
    paused.pause(Utc::now()).unwrap();
    paused.save(&event_store).await.unwrap();

    let ids = event_store
        .list_enabled_endpoint_ids_by_tenant_and_event_type(tenant_id, &invoice_paid)
        .await
        .unwrap();
    assert_eq!(ids, [subscribed_id]);
}

#[test_log::test(tokio::test)]
async fn test_removed_endpoint_leaves_tenant_listings() {
    let event_store = InMemoryWebhookEndpointEventStore::new();
    let tenant_id = TenantID::new_generated();

    let mut endpoint = make_endpoint(tenant_id, "billing-hooks");
    endpoint.save(&event_store).await.unwrap();

    endpoint.remove(Utc::now()).unwrap();
    endpoint.save(&event_store).await.unwrap();

    let ids = event_store
        .list_endpoint_ids_by_tenant(tenant_id, PaginationOpts::all())
        .await
        .unwrap();
    assert_eq!(ids, []);

    let count = event_store
        .count_endpoints_by_tenant(tenant_id)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let found = event_store
        .find_endpoint_id_by_tenant_and_name(
            tenant_id,
            &WebhookEndpointName::try_new("billing-hooks").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(found, None);
}

#[test_log::test(tokio::test)]
async fn test_duplicate_name_within_tenant_rejected() {
    let event_store = InMemoryWebhookEndpointEventStore::new();
    let tenant_id = TenantID::new_generated();

    save_endpoint(&event_store, tenant_id, "billing-hooks").await;

    let mut duplicate = make_endpoint(tenant_id, "billing-hooks");
    assert_matches!(
        duplicate.save(&event_store).await,
        Err(SaveEventsError::Internal(_))
    );

    // Same name under another tenant is fine
    save_endpoint(&event_store, TenantID::new_generated(), "billing-hooks").await;
}

#[test_log::test(tokio::test)]
async fn test_rename_to_own_name_is_not_a_conflict() {
    let event_store = InMemoryWebhookEndpointEventStore::new();
    let tenant_id = TenantID::new_generated();

    let mut endpoint = make_endpoint(tenant_id, "billing-hooks");
    endpoint.save(&event_store).await.unwrap();

    endpoint
        .modify(
            Utc::now(),
            Some(WebhookEndpointName::try_new("billing-hooks").unwrap()),
            None,
            None,
            None,
            Some(5),
        )
        .unwrap();
    endpoint.save(&event_store).await.unwrap();

    endpoint
        .modify(
            Utc::now(),
            Some(WebhookEndpointName::try_new("invoicing-hooks").unwrap()),
            None,
            None,
            None,
            None,
        )
        .unwrap();
    endpoint.save(&event_store).await.unwrap();

    let found = event_store
        .find_endpoint_id_by_tenant_and_name(
            tenant_id,
            &WebhookEndpointName::try_new("invoicing-hooks").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(found, Some(endpoint.endpoint_id));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn make_endpoint(tenant_id: TenantID, endpoint_name: &str) -> WebhookEndpoint {
    WebhookEndpoint::new(
        Utc::now(),
        WebhookEndpointID::new_generated(),
        tenant_id,
        WebhookEndpointName::try_new(endpoint_name).unwrap(),
        url::Url::parse("https://example.com/hooks").unwrap(),
        vec![WebhookEventTypeCatalog::invoice_paid()],
        WebhookEndpointSecret::try_new("whsec_test").unwrap(),
        DEFAULT_WEBHOOK_TIMEOUT_SECONDS,
        DEFAULT_WEBHOOK_MAX_RETRIES,
    )
}

async fn save_endpoint(
    event_store: &InMemoryWebhookEndpointEventStore,
    tenant_id: TenantID,
    endpoint_name: &str,
) -> WebhookEndpointID {
    let mut endpoint = make_endpoint(tenant_id, endpoint_name);
    endpoint.save(event_store).await.unwrap();
    endpoint.endpoint_id
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
