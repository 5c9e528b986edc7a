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
use folio_time_source::SystemTimeSource;
use folio_webhooks::*;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookDeliveryWorker)]
pub struct WebhookDeliveryWorkerImpl {
    delivery_event_store: Arc<dyn WebhookDeliveryEventStore>,
    endpoint_event_store: Arc<dyn WebhookEndpointEventStore>,
    webhook_event_repository: Arc<dyn WebhookEventRepository>,
    webhook_signer: Arc<dyn WebhookSigner>,
    webhook_sender: Arc<dyn WebhookSender>,
    health_aggregator: Arc<dyn WebhookHealthAggregator>,
    time_source: Arc<dyn SystemTimeSource>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookDeliveryWorkerImpl {
    /// Endpoint configuration and secret are resolved at attempt time, so
    /// retries pick up rotations and removals that happened since dispatch
    async fn resolve_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Option<WebhookEndpoint>, InternalError> {
        match WebhookEndpoint::load(endpoint_id, self.endpoint_event_store.as_ref()).await {
            Ok(endpoint) if !endpoint.is_removed() => Ok(Some(endpoint)),
            Ok(_) => Ok(None),
            Err(LoadError::NotFound(_)) => Ok(None),
            Err(LoadError::ProjectionError(e)) => Err(e.int_err()),
            Err(LoadError::Internal(e)) => Err(e),
        }
    }

    async fn abort_delivery(
        &self,
        mut delivery: WebhookDelivery,
        now: DateTime<Utc>,
    ) -> Result<WebhookDeliveryAttemptReport, InternalError> {
        tracing::warn!(
            delivery_id = %delivery.delivery_id,
            "Webhook endpoint no longer exists, aborting delivery",
        );

        delivery.abort(now, "endpoint removed").int_err()?;
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .int_err()?;

        Ok(WebhookDeliveryAttemptReport {
            delivery_id: delivery.delivery_id,
            status: delivery.status(),
            outcome: None,
            next_attempt_at: None,
        })
    }

    fn generate_headers(
        &self,
        endpoint: &WebhookEndpoint,
        delivery: &WebhookDelivery,
        payload_bytes: &[u8],
        signed_at: DateTime<Utc>,
    ) -> Result<http::HeaderMap, InternalError> {
        let signature = self.webhook_signer.generate_signature(
            &endpoint.secret,
            signed_at,
            payload_bytes,
        );

        let mut headers = http::HeaderMap::new();

        // Basic headers
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        // Signature headers
        headers.insert(
            http::header::HeaderName::from_static(HEADER_WEBHOOK_SIGNATURE),
            http::HeaderValue::from_str(signature.as_str()).int_err()?,
        );
        headers.insert(
            http::header::HeaderName::from_static(HEADER_WEBHOOK_TIMESTAMP),
            http::HeaderValue::from_str(&signed_at.timestamp().to_string()).int_err()?,
        );

        // Delivery headers
        headers.insert(
            http::header::HeaderName::from_static(HEADER_WEBHOOK_EVENT),
            http::HeaderValue::from_str(delivery.event_type.as_ref()).int_err()?,
        );
        headers.insert(
            http::header::HeaderName::from_static(HEADER_WEBHOOK_DELIVERY_ID),
            http::HeaderValue::from_str(&delivery.delivery_id.to_string()).int_err()?,
        );
        headers.insert(
            http::header::HeaderName::from_static(HEADER_WEBHOOK_DELIVERY_ATTEMPT),
            http::HeaderValue::from_str(&delivery.attempt_count().to_string()).int_err()?,
        );

        Ok(headers)
    }

    async fn record_terminal_outcome(
        &self,
        delivery: &WebhookDelivery,
        endpoint_id: WebhookEndpointID,
        finished_at: DateTime<Utc>,
    ) -> Result<(), InternalError> {
        let status = delivery.status();
        if status != WebhookDeliveryStatus::Sent && status != WebhookDeliveryStatus::Failed {
            return Ok(());
        }

        let succeeded = status == WebhookDeliveryStatus::Sent;
        if delivery.event_type == WebhookEventTypeCatalog::test_ping() {
            // Test traffic stays out of the success rate
            let ping_status = if succeeded {
                WebhookPingStatus::Success
            } else {
                WebhookPingStatus::Failed
            };
            self.health_aggregator
                .record_ping(endpoint_id, finished_at, ping_status)
                .await
        } else {
            self.health_aggregator
                .record_outcome(endpoint_id, succeeded)
                .await
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookDeliveryWorker for WebhookDeliveryWorkerImpl {
    #[tracing::instrument(
        level = "debug",
        name = "WebhookDeliveryWorkerImpl::execute_attempt",
        skip_all,
        fields(%delivery_id),
    )]
    async fn execute_attempt(
        &self,
        delivery_id: WebhookDeliveryID,
    ) -> Result<WebhookDeliveryAttemptReport, InternalError> {
        let mut delivery = WebhookDelivery::load(delivery_id, self.delivery_event_store.as_ref())
            .await
            .int_err()?;

        if delivery.is_finished() {
            tracing::warn!("Webhook delivery is already finished, skipping attempt");
            return Ok(WebhookDeliveryAttemptReport {
                delivery_id,
                status: delivery.status(),
                outcome: None,
                next_attempt_at: None,
            });
        }

        let endpoint_id = delivery.webhook_endpoint_id();
        let Some(endpoint) = self.resolve_endpoint(endpoint_id).await? else {
            let now = self.time_source.now();
            return self.abort_delivery(delivery, now).await;
        };

        let started_at = self.time_source.now();
        delivery.start_attempt(started_at).int_err()?;
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .int_err()?;

        let webhook_event = self
            .webhook_event_repository
            .get_event(delivery.webhook_event_id)
            .await
            .map_err(|e| match e {
                GetWebhookEventError::NotFound(e) => e.int_err(),
                GetWebhookEventError::Internal(e) => e,
            })?;

        let payload_bytes =
            bytes::Bytes::from(serde_json::to_vec(&webhook_event.payload).int_err()?);

        let headers = self.generate_headers(&endpoint, &delivery, &payload_bytes, started_at)?;
        let timeout = std::time::Duration::from_secs(u64::from(endpoint.timeout_seconds));

        let send_started = std::time::Instant::now();
        let send_result = self
            .webhook_sender
            .send_webhook(
                endpoint.target_url.clone(),
                payload_bytes,
                headers,
                timeout,
            )
            .await;
        let response_time_ms =
            u64::try_from(send_started.elapsed().as_millis()).unwrap_or(u64::MAX);

        // Transport failures and unsuccessful statuses both fold into a
        // failure outcome, leaving the retry policy to decide what is next
        let outcome = match send_result {
            Ok(response) if response.status_code.is_success() => {
                WebhookDeliveryAttemptOutcome::Success(WebhookAttemptResponse {
                    http_status_code: response.status_code.as_u16(),
                    response_time_ms,
                })
            }
            Ok(response) => WebhookDeliveryAttemptOutcome::Failure(WebhookAttemptFailure {
                http_status_code: Some(response.status_code.as_u16()),
                response_time_ms: Some(response_time_ms),
                error_message: format!("Received status {}", response.status_code.as_u16()),
            }),
            Err(e @ WebhookSendError::ConnectionTimeout(_))
            | Err(e @ WebhookSendError::FailedToConnect(_)) => {
                WebhookDeliveryAttemptOutcome::Failure(WebhookAttemptFailure {
                    http_status_code: None,
                    response_time_ms: None,
                    error_message: e.to_string(),
                })
            }
            Err(WebhookSendError::Internal(e)) => {
                WebhookDeliveryAttemptOutcome::Failure(WebhookAttemptFailure {
                    http_status_code: None,
                    response_time_ms: None,
                    error_message: e.reason(),
                })
            }
        };

        let finished_at = self.time_source.now();
        delivery.finish_attempt(finished_at, outcome.clone()).int_err()?;
        delivery
            .save(self.delivery_event_store.as_ref())
            .await
            .int_err()?;

        self.record_terminal_outcome(&delivery, endpoint_id, finished_at)
            .await?;

        let status = delivery.status();
        let next_attempt_at = delivery.timing.next_attempt_at;

        tracing::debug!(
            ?status,
            success = outcome.is_success(),
            attempt = delivery.attempt_count(),
            "Webhook delivery attempt finished",
        );

        Ok(WebhookDeliveryAttemptReport {
            delivery_id,
            status,
            outcome: Some(outcome),
            next_attempt_at,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
