// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_event_sourcing::EventStore;
use folio_internal_error::InternalError;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait WebhookDeliveryEventStore: EventStore<WebhookDeliveryState> {
    /// Delivery history of an endpoint, newest first
    async fn list_deliveries_by_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
        filters: &WebhookDeliveryFilters,
        pagination: PaginationOpts,
    ) -> Result<WebhookDeliveryListing, ListWebhookDeliveriesError>;

    /// Terminally failed deliveries of an endpoint, oldest first
    async fn list_failed_delivery_ids_by_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Vec<WebhookDeliveryID>, ListWebhookDeliveriesError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum ListWebhookDeliveriesError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
