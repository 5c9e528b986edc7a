// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single try at handing the payload to the receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryAttempt {
    /// 1-based position within the delivery
    pub attempt_number: u32,
    pub started_at: DateTime<Utc>,
    /// Filled in when the attempt finishes
    pub attempt_result: Option<WebhookDeliveryAttemptResult>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryAttemptResult {
    pub finished_at: DateTime<Utc>,
    pub outcome: WebhookDeliveryAttemptOutcome,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookDeliveryAttemptOutcome {
    Success(WebhookAttemptResponse),
    Failure(WebhookAttemptFailure),
}

impl WebhookDeliveryAttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WebhookDeliveryAttemptOutcome::Success(_))
    }

    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            WebhookDeliveryAttemptOutcome::Success(response) => Some(response.http_status_code),
            WebhookDeliveryAttemptOutcome::Failure(failure) => failure.http_status_code,
        }
    }

    pub fn response_time_ms(&self) -> Option<u64> {
        match self {
            WebhookDeliveryAttemptOutcome::Success(response) => Some(response.response_time_ms),
            WebhookDeliveryAttemptOutcome::Failure(failure) => failure.response_time_ms,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Receiver acknowledged with a 2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAttemptResponse {
    pub http_status_code: u16,
    pub response_time_ms: u64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Non-2xx response, timeout, or connection error.
/// Status code and timing are absent when no response arrived at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAttemptFailure {
    pub http_status_code: Option<u16>,
    pub response_time_ms: Option<u64>,
    pub error_message: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
