// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dill::{component, interface};
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookHealthAggregator)]
pub struct WebhookHealthAggregatorImpl {
    health_repository: Arc<dyn WebhookEndpointHealthRepository>,
    webhooks_config: Arc<WebhooksConfig>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookHealthAggregatorImpl {
    fn log_tier_transition(&self, updated: &WebhookEndpointHealthRecord, success: bool) {
        let min_sample_size = self.webhooks_config.health_min_sample_size;

        // The update was a single increment, so undoing it gives the record
        // the previous tier was derived from
        let mut previous = updated.clone();
        if success {
            previous.success_count -= 1;
        } else {
            previous.failure_count -= 1;
        }

        let old_status = previous.health_status(min_sample_size);
        let new_status = updated.health_status(min_sample_size);
        if old_status == new_status {
            return;
        }

        match new_status {
            WebhookEndpointHealthStatus::Warning | WebhookEndpointHealthStatus::Critical => {
                tracing::warn!(
                    endpoint_id = %updated.endpoint_id,
                    ?old_status,
                    ?new_status,
                    "Webhook endpoint health degraded",
                );
            }
            _ => {
                tracing::info!(
                    endpoint_id = %updated.endpoint_id,
                    ?old_status,
                    ?new_status,
                    "Webhook endpoint health tier changed",
                );
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookHealthAggregator for WebhookHealthAggregatorImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%endpoint_id, success))]
    async fn record_outcome(
        &self,
        endpoint_id: WebhookEndpointID,
        success: bool,
    ) -> Result<(), InternalError> {
        let updated = if success {
            self.health_repository.increment_success(endpoint_id).await
        } else {
            self.health_repository.increment_failure(endpoint_id).await
        }
        .map_err(|e| match e {
            UpdateWebhookEndpointHealthError::Internal(e) => e,
        })?;

        self.log_tier_transition(&updated, success);
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%endpoint_id, ?status))]
    async fn record_ping(
        &self,
        endpoint_id: WebhookEndpointID,
        pinged_at: DateTime<Utc>,
        status: WebhookPingStatus,
    ) -> Result<(), InternalError> {
        self.health_repository
            .record_ping(endpoint_id, pinged_at, status)
            .await
            .map_err(|e| match e {
                UpdateWebhookEndpointHealthError::Internal(e) => e,
            })
    }

    async fn endpoint_health(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealth, InternalError> {
        let record = self
            .health_repository
            .get_health(endpoint_id)
            .await
            .map_err(|e| match e {
                GetWebhookEndpointHealthError::Internal(e) => e,
            })?;

        Ok(WebhookEndpointHealth {
            success_rate: record.success_rate(),
            status: record.health_status(self.webhooks_config.health_min_sample_size),
            record,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
