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
use folio_webhooks::{RegenerateWebhookEndpointSecretUseCase, TenantID, WebhookEndpointID};
use folio_webhooks_services::{
    RegenerateWebhookEndpointSecretUseCaseImpl,
    WebhookSecretGeneratorImpl,
};

use super::WebhookEndpointUseCaseHarness;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_regenerate_replaces_secret() {
    let harness = RegenerateWebhookEndpointSecretUseCaseHarness::new();
    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert!(res.is_ok(), "Failed to regenerate secret: {res:?}",);
    let first_secret = res.unwrap().secret;

    assert!(first_secret.starts_with("whsec_"));
    assert_eq!(first_secret.len(), 70);
    assert_ne!(first_secret, "whsec_test_secret");

    // Future deliveries sign with the new secret
    let updated = harness.find_endpoint(endpoint.endpoint_id).await.unwrap();
    assert_eq!(updated.secret.exposed_value(), first_secret);

    // Every rotation produces a fresh secret
    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert!(res.is_ok(), "Failed to regenerate secret: {res:?}",);
    assert_ne!(res.unwrap().secret, first_secret);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_regenerate_not_found() {
    let harness = RegenerateWebhookEndpointSecretUseCaseHarness::new();

    let unknown_endpoint_id = WebhookEndpointID::new_generated();
    let res = harness.use_case.execute(unknown_endpoint_id).await;
    assert_matches!(
        res,
        Err(folio_webhooks::RegenerateWebhookEndpointSecretError::NotFound(e))
            if e.endpoint_id == unknown_endpoint_id
    );

    let endpoint = harness.create_endpoint(TenantID::new_generated()).await;
    harness.remove_endpoint(endpoint.endpoint_id).await;

    let res = harness.use_case.execute(endpoint.endpoint_id).await;
    assert_matches!(
        res,
        Err(folio_webhooks::RegenerateWebhookEndpointSecretError::NotFound(_))
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[oop::extend(WebhookEndpointUseCaseHarness, base_harness)]
struct RegenerateWebhookEndpointSecretUseCaseHarness {
    base_harness: WebhookEndpointUseCaseHarness,
    use_case: Arc<dyn RegenerateWebhookEndpointSecretUseCase>,
}

impl RegenerateWebhookEndpointSecretUseCaseHarness {
    fn new() -> Self {
        let base_harness = WebhookEndpointUseCaseHarness::new();

        let mut b = CatalogBuilder::new_chained(base_harness.catalog());
        b.add::<RegenerateWebhookEndpointSecretUseCaseImpl>();
        b.add::<WebhookSecretGeneratorImpl>();

        let catalog = b.build();

        Self {
            base_harness,
            use_case: catalog.get_one().unwrap(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
