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
#[interface(dyn WebhookEndpointQueryService)]
pub struct WebhookEndpointQueryServiceImpl {
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    health_aggregator: Arc<dyn WebhookHealthAggregator>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookEndpointQueryService for WebhookEndpointQueryServiceImpl {
    #[tracing::instrument(
        level = "debug",
        name = "WebhookEndpointQueryServiceImpl::list_endpoints_by_tenant",
        skip_all,
        fields(%tenant_id),
    )]
    async fn list_endpoints_by_tenant(
        &self,
        tenant_id: TenantID,
        pagination: PaginationOpts,
    ) -> Result<WebhookEndpointListing, InternalError> {
        let total_count = self
            .endpoint_event_store
            .count_endpoints_by_tenant(tenant_id)
            .await
            .map_err(|e| match e {
                CountWebhookEndpointsError::Internal(e) => e,
            })?;

        let endpoint_ids = self
            .endpoint_event_store
            .list_endpoint_ids_by_tenant(tenant_id, pagination)
            .await
            .map_err(|e| match e {
                ListWebhookEndpointsError::Internal(e) => e,
            })?;

        let load_results =
            WebhookEndpoint::load_multi(endpoint_ids, self.endpoint_event_store.as_ref())
                .await
                .map_err(|e| match e {
                    GetEventsError::Internal(e) => e,
                })?;

        let mut endpoints = Vec::with_capacity(load_results.len());
        for load_result in load_results {
            match load_result {
                Ok(endpoint) => endpoints.push(endpoint.into_state()),
                // Removed between listing and loading
                Err(LoadError::NotFound(_)) => continue,
                Err(LoadError::ProjectionError(e)) => return Err(e.int_err()),
                Err(LoadError::Internal(e)) => return Err(e),
            }
        }

        Ok(WebhookEndpointListing {
            endpoints,
            total_count,
        })
    }

    #[tracing::instrument(
        level = "debug",
        name = "WebhookEndpointQueryServiceImpl::find_endpoint",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn find_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Option<WebhookEndpointState>, InternalError> {
        match WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await {
            Ok(endpoint) if endpoint.is_removed() => Ok(None),
            Ok(endpoint) => Ok(Some(endpoint.into_state())),
            Err(LoadError::NotFound(_)) => Ok(None),
            Err(LoadError::ProjectionError(e)) => Err(e.int_err()),
            Err(LoadError::Internal(e)) => Err(e),
        }
    }

    #[tracing::instrument(
        level = "debug",
        name = "WebhookEndpointQueryServiceImpl::get_endpoint_overview",
        skip_all,
        fields(%endpoint_id),
    )]
    async fn get_endpoint_overview(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Option<WebhookEndpointOverview>, InternalError> {
        let Some(endpoint) = self.find_endpoint(endpoint_id).await? else {
            return Ok(None);
        };

        let health = self.health_aggregator.endpoint_health(endpoint_id).await?;

        Ok(Some(WebhookEndpointOverview {
            endpoint_id: endpoint.endpoint_id,
            is_active: endpoint.is_active(),
            endpoint_name: endpoint.endpoint_name,
            target_url: endpoint.target_url,
            event_types: endpoint.event_types,
            timeout_seconds: endpoint.timeout_seconds,
            max_retries: endpoint.max_retries,
            created_at: endpoint.created_at,
            health,
        }))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
