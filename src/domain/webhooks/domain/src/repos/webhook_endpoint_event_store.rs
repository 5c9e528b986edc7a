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
pub trait WebhookEndpointEventStore: EventStore<WebhookEndpointState> {
    /// Endpoints of a tenant in registration order, enabled and paused alike.
    /// Removed endpoints are excluded.
    async fn list_endpoint_ids_by_tenant(
        &self,
        tenant_id: TenantID,
        pagination: PaginationOpts,
    ) -> Result<Vec<WebhookEndpointID>, ListWebhookEndpointsError>;

    async fn count_endpoints_by_tenant(
        &self,
        tenant_id: TenantID,
    ) -> Result<usize, CountWebhookEndpointsError>;

    async fn find_endpoint_id_by_tenant_and_name(
        &self,
        tenant_id: TenantID,
        endpoint_name: &WebhookEndpointName,
    ) -> Result<Option<WebhookEndpointID>, FindWebhookEndpointError>;

    /// Fan-out query: enabled endpoints of the tenant subscribed to the given
    /// event type
    async fn list_enabled_endpoint_ids_by_tenant_and_event_type(
        &self,
        tenant_id: TenantID,
        event_type: &WebhookEventType,
    ) -> Result<Vec<WebhookEndpointID>, ListWebhookEndpointsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum ListWebhookEndpointsError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum CountWebhookEndpointsError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum FindWebhookEndpointError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
#[error("Webhook endpoint id='{endpoint_id}' not found")]
pub struct WebhookEndpointNotFoundError {
    pub endpoint_id: WebhookEndpointID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
