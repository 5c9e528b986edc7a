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
use folio_webhooks_inmem::domain::*;
use folio_webhooks_inmem::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_create_and_get_event() {
    let repo = InMemoryWebhookEventRepository::new();
    let event = make_event();

    repo.create_event(&event).await.unwrap();

    let stored = repo.get_event(event.event_id).await.unwrap();
    assert_eq!(stored, event);
}

#[test_log::test(tokio::test)]
async fn test_duplicate_event_id_rejected() {
    let repo = InMemoryWebhookEventRepository::new();
    let event = make_event();

    repo.create_event(&event).await.unwrap();

    assert_matches!(
        repo.create_event(&event).await,
        Err(CreateWebhookEventError::DuplicateId(e)) if e.event_id == event.event_id
    );
}

#[test_log::test(tokio::test)]
async fn test_get_missing_event_not_found() {
    let repo = InMemoryWebhookEventRepository::new();
    let event_id = WebhookEventID::new_generated();

    assert_matches!(
        repo.get_event(event_id).await,
        Err(GetWebhookEventError::NotFound(e)) if e.event_id == event_id
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn make_event() -> WebhookEvent {
    WebhookEvent::new(
        WebhookEventID::new_generated(),
        TenantID::new_generated(),
        WebhookEventTypeCatalog::invoice_paid(),
        serde_json::json!({
            "invoice_id": "INV-0042",
            "amount": 125.50,
        }),
        Utc::now(),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
