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

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Performs the actual HTTP POST of a webhook request.
///
/// Senders only fail on transport problems. A response with a non-success
/// status code is still `Ok`: it is the caller's job to interpret status
/// codes, record them, and decide whether to retry.
#[async_trait::async_trait]
pub trait WebhookSender: Send + Sync {
    async fn send_webhook(
        &self,
        target_url: url::Url,
        payload: bytes::Bytes,
        headers: http::HeaderMap,
        timeout: std::time::Duration,
    ) -> Result<WebhookResponse, WebhookSendError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status_code: http::StatusCode,
    pub headers: http::HeaderMap,
    pub body: String,
    pub finished_at: DateTime<Utc>,
}

impl WebhookResponse {
    pub fn new(
        status_code: http::StatusCode,
        headers: http::HeaderMap,
        body: String,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status_code,
            headers,
            body,
            finished_at,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum WebhookSendError {
    #[error(transparent)]
    ConnectionTimeout(WebhookSendConnectionTimeoutError),

    #[error(transparent)]
    FailedToConnect(WebhookSendFailedToConnectError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(thiserror::Error, Debug)]
#[error("Webhook timed out after {timeout:?}: target_url = '{target_url}'")]
pub struct WebhookSendConnectionTimeoutError {
    pub target_url: url::Url,
    pub timeout: std::time::Duration,
}

#[derive(thiserror::Error, Debug)]
#[error("Webhook failed to connect: target_url = '{target_url}'")]
pub struct WebhookSendFailedToConnectError {
    pub target_url: url::Url,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
