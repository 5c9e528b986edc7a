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

use crate::{WebhookDeliveryAttemptOutcome, WebhookDeliveryID, WebhookDeliveryStatus};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Executes a single delivery attempt: signs the payload, POSTs it to the
/// endpoint, and records the result on the delivery.
///
/// Transport failures and unsuccessful status codes are not errors of this
/// trait. They are folded into the returned report, and the delivery's retry
/// policy decides what happens next. `Err` means the attempt itself could not
/// be carried out (storage failure, corrupt state).
#[async_trait::async_trait]
pub trait WebhookDeliveryWorker: Send + Sync {
    async fn execute_attempt(
        &self,
        delivery_id: WebhookDeliveryID,
    ) -> Result<WebhookDeliveryAttemptReport, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct WebhookDeliveryAttemptReport {
    pub delivery_id: WebhookDeliveryID,
    pub status: WebhookDeliveryStatus,
    pub outcome: Option<WebhookDeliveryAttemptOutcome>,

    /// Set when the delivery moved to [`WebhookDeliveryStatus::Retrying`] and
    /// must be re-queued for that moment.
    pub next_attempt_at: Option<DateTime<Utc>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
