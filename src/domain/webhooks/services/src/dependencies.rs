// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::CatalogBuilder;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn register_dependencies(catalog_builder: &mut CatalogBuilder) {
    catalog_builder.add::<WebhookSignerImpl>();
    catalog_builder.add::<WebhookSecretGeneratorImpl>();
    catalog_builder.add::<WebhookSenderImpl>();

    catalog_builder.add::<WebhookDispatcherImpl>();
    catalog_builder.add::<WebhookDeliveryQueueImpl>();
    catalog_builder.add::<WebhookDeliveryWorkerImpl>();
    catalog_builder.add::<WebhookDeliveryAgentImpl>();
    catalog_builder.add::<WebhookHealthAggregatorImpl>();

    catalog_builder.add::<WebhookEndpointQueryServiceImpl>();
    catalog_builder.add::<WebhookDeliveryQueryServiceImpl>();

    catalog_builder.add::<CreateWebhookEndpointUseCaseImpl>();
    catalog_builder.add::<UpdateWebhookEndpointUseCaseImpl>();
    catalog_builder.add::<ToggleWebhookEndpointUseCaseImpl>();
    catalog_builder.add::<RegenerateWebhookEndpointSecretUseCaseImpl>();
    catalog_builder.add::<RemoveWebhookEndpointUseCaseImpl>();
    catalog_builder.add::<PingWebhookEndpointUseCaseImpl>();
    catalog_builder.add::<RetryFailedWebhookDeliveriesUseCaseImpl>();
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
