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
use folio_time_source::SystemTimeSource;
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookDeliveryAgent)]
pub struct WebhookDeliveryAgentImpl {
    delivery_queue: Arc<dyn WebhookDeliveryQueue>,
    delivery_worker: Arc<dyn WebhookDeliveryWorker>,
    webhooks_config: Arc<WebhooksConfig>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookDeliveryAgent for WebhookDeliveryAgentImpl {
    #[tracing::instrument(level = "info", name = "WebhookDeliveryAgentImpl::run", skip_all)]
    async fn run(&self) -> Result<(), InternalError> {
        tracing::info!(
            worker_count = self.webhooks_config.worker_count,
            "Webhook delivery agent started",
        );

        let poll_interval = chrono::Duration::seconds(i64::from(
            self.webhooks_config.agent_poll_interval_seconds,
        ));

        loop {
            self.run_until_idle().await?;
            self.time_source.sleep(poll_interval).await;
        }
    }

    #[tracing::instrument(
        level = "debug",
        name = "WebhookDeliveryAgentImpl::run_until_idle",
        skip_all,
    )]
    async fn run_until_idle(&self) -> Result<usize, InternalError> {
        let mut join_set = tokio::task::JoinSet::new();
        let mut attempts_executed = 0;

        loop {
            // Hand out ready deliveries while worker slots remain. The queue
            // withholds entries for endpoints that already have an attempt in
            // flight, so concurrent tasks always target distinct endpoints.
            while join_set.len() < self.webhooks_config.worker_count {
                let Some(dequeued) = self.delivery_queue.take_next_ready(self.time_source.now())
                else {
                    break;
                };

                let worker = self.delivery_worker.clone();
                join_set.spawn(async move {
                    let result = worker.execute_attempt(dequeued.delivery_id).await;
                    (dequeued.endpoint_id, result)
                });
            }

            // Nothing in flight and nothing ready means we have drained
            let Some(joined) = join_set.join_next().await else {
                break;
            };

            let (endpoint_id, result) = joined.int_err()?;
            self.delivery_queue.release_endpoint(endpoint_id);

            let report = result?;
            attempts_executed += 1;

            if let Some(at) = report.next_attempt_at {
                self.delivery_queue
                    .schedule_retry(report.delivery_id, endpoint_id, at);
            }
        }

        if attempts_executed > 0 {
            tracing::debug!(attempts_executed, "Webhook delivery pass finished");
        }

        Ok(attempts_executed)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
