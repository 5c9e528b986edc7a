// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::Utc;
use dill::{component, interface};
use folio_internal_error::ErrorIntoInternal;
use folio_webhooks::{
    WebhookResponse,
    WebhookSendConnectionTimeoutError,
    WebhookSendError,
    WebhookSendFailedToConnectError,
    WebhookSender,
};

use crate::FOLIO_WEBHOOK_USER_AGENT;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct WebhookSenderImpl {
    client: reqwest::Client,
}

#[component(pub)]
#[interface(dyn WebhookSender)]
impl WebhookSenderImpl {
    pub fn new() -> Self {
        // Receivers must never bounce a signed request to another host
        let client = reqwest::Client::builder()
            .user_agent(FOLIO_WEBHOOK_USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to initialize HTTP client");

        Self { client }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookSender for WebhookSenderImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%target_url))]
    async fn send_webhook(
        &self,
        target_url: url::Url,
        payload: bytes::Bytes,
        headers: http::HeaderMap,
        timeout: std::time::Duration,
    ) -> Result<WebhookResponse, WebhookSendError> {
        let response = match self
            .client
            .post(target_url.clone())
            .headers(headers)
            .body(payload)
            .timeout(timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                return Err(WebhookSendError::ConnectionTimeout(
                    WebhookSendConnectionTimeoutError {
                        target_url,
                        timeout,
                    },
                ));
            }
            Err(err) if err.is_connect() => {
                return Err(WebhookSendError::FailedToConnect(
                    WebhookSendFailedToConnectError { target_url },
                ));
            }
            Err(err) => return Err(err.int_err().into()),
        };

        let status_code = response.status();
        let response_headers = response.headers().clone();

        // The timeout covers reading the body as well
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if err.is_timeout() => {
                return Err(WebhookSendError::ConnectionTimeout(
                    WebhookSendConnectionTimeoutError {
                        target_url,
                        timeout,
                    },
                ));
            }
            Err(err) => return Err(err.int_err().into()),
        };

        Ok(WebhookResponse::new(
            status_code,
            response_headers,
            body,
            Utc::now(),
        ))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
