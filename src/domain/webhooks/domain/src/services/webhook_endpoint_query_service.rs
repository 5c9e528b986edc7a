// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use folio_internal_error::InternalError;

use crate::{
    PaginationOpts,
    TenantID,
    WebhookEndpointHealth,
    WebhookEndpointID,
    WebhookEndpointName,
    WebhookEndpointState,
    WebhookEventType,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Read side of the endpoint registry. Removed endpoints are invisible here.
#[async_trait::async_trait]
pub trait WebhookEndpointQueryService: Send + Sync {
    async fn list_endpoints_by_tenant(
        &self,
        tenant_id: TenantID,
        pagination: PaginationOpts,
    ) -> Result<WebhookEndpointListing, InternalError>;

    async fn find_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Option<WebhookEndpointState>, InternalError>;

    /// Secret-free view of an endpoint, with its current health attached.
    async fn get_endpoint_overview(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Option<WebhookEndpointOverview>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct WebhookEndpointListing {
    pub endpoints: Vec<WebhookEndpointState>,
    pub total_count: usize,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct WebhookEndpointOverview {
    pub endpoint_id: WebhookEndpointID,
    pub endpoint_name: WebhookEndpointName,
    pub target_url: url::Url,
    pub event_types: Vec<WebhookEventType>,
    pub is_active: bool,
    pub timeout_seconds: u32,
    pub max_retries: u32,
    pub created_at: DateTime<Utc>,
    pub health: WebhookEndpointHealth,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
