// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_internal_error::InternalError;

use crate::{
    PaginationOpts,
    WebhookDeliveryFilters,
    WebhookDeliveryID,
    WebhookDeliveryListing,
    WebhookDeliveryState,
    WebhookEndpointID,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait WebhookDeliveryQueryService: Send + Sync {
    async fn get_delivery(
        &self,
        delivery_id: WebhookDeliveryID,
    ) -> Result<Option<WebhookDeliveryState>, InternalError>;

    /// Delivery history of an endpoint, newest first.
    async fn list_deliveries_by_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
        filters: &WebhookDeliveryFilters,
        pagination: PaginationOpts,
    ) -> Result<WebhookDeliveryListing, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
