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
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookDeliveryQueryService)]
pub struct WebhookDeliveryQueryServiceImpl {
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookDeliveryQueryService for WebhookDeliveryQueryServiceImpl {
    #[tracing::instrument(
        level = "debug",
        name = "WebhookDeliveryQueryServiceImpl::get_delivery",
        skip_all,
        fields(%delivery_id),
    )]
    async fn get_delivery(
        &self,
        delivery_id: WebhookDeliveryID,
    ) -> Result<Option<WebhookDeliveryState>, InternalError> {
        match WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref()).await {
            Ok(delivery) => Ok(Some(delivery.into_state())),
            Err(LoadError::NotFound(_)) => Ok(None),
            Err(LoadError::ProjectionError(e)) => Err(e.int_err()),
            Err(LoadError::Internal(e)) => Err(e),
        }
    }

    #[tracing::instrument(
        level = "debug",
        name = "WebhookDeliveryQueryServiceImpl::list_deliveries_by_endpoint",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn list_deliveries_by_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
        filters: &WebhookDeliveryFilters,
        pagination: PaginationOpts,
    ) -> Result<WebhookDeliveryListing, InternalError> {
        self.delivery_event_store
            .list_deliveries_by_endpoint(endpoint_id, filters, pagination)
            .await
            .map_err(|e| match e {
                ListWebhookDeliveriesError::Internal(e) => e,
            })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
