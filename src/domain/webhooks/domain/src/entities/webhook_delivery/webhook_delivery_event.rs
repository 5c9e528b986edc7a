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

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookDeliveryEvent {
    Created(WebhookDeliveryEventCreated),
    AttemptStarted(WebhookDeliveryEventAttemptStarted),
    AttemptFinished(WebhookDeliveryEventAttemptFinished),
    Aborted(WebhookDeliveryEventAborted),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryEventCreated {
    pub event_time: DateTime<Utc>,
    pub delivery_id: WebhookDeliveryID,
    pub channel: DeliveryChannel,
    pub webhook_event_id: WebhookEventID,
    pub event_type: WebhookEventType,
    pub retry_policy: RetryPolicy,
    /// Set when this delivery was created by manually retrying a failed one
    pub retry_of: Option<WebhookDeliveryID>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryEventAttemptStarted {
    pub event_time: DateTime<Utc>,
    pub delivery_id: WebhookDeliveryID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryEventAttemptFinished {
    pub event_time: DateTime<Utc>,
    pub delivery_id: WebhookDeliveryID,
    pub outcome: WebhookDeliveryAttemptOutcome,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Delivery was cut short without exhausting its attempts, e.g. because the
/// endpoint was removed while a retry was scheduled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryEventAborted {
    pub event_time: DateTime<Utc>,
    pub delivery_id: WebhookDeliveryID,
    pub reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookDeliveryEvent {
    pub fn typename(&self) -> &'static str {
        match self {
            WebhookDeliveryEvent::Created(_) => "WebhookDeliveryEventCreated",
            WebhookDeliveryEvent::AttemptStarted(_) => "WebhookDeliveryEventAttemptStarted",
            WebhookDeliveryEvent::AttemptFinished(_) => "WebhookDeliveryEventAttemptFinished",
            WebhookDeliveryEvent::Aborted(_) => "WebhookDeliveryEventAborted",
        }
    }

    pub fn delivery_id(&self) -> WebhookDeliveryID {
        match self {
            WebhookDeliveryEvent::Created(e) => e.delivery_id,
            WebhookDeliveryEvent::AttemptStarted(e) => e.delivery_id,
            WebhookDeliveryEvent::AttemptFinished(e) => e.delivery_id,
            WebhookDeliveryEvent::Aborted(e) => e.delivery_id,
        }
    }

    pub fn event_time(&self) -> DateTime<Utc> {
        match self {
            WebhookDeliveryEvent::Created(e) => e.event_time,
            WebhookDeliveryEvent::AttemptStarted(e) => e.event_time,
            WebhookDeliveryEvent::AttemptFinished(e) => e.event_time,
            WebhookDeliveryEvent::Aborted(e) => e.event_time,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<WebhookDeliveryEventCreated> for WebhookDeliveryEvent {
    fn from(e: WebhookDeliveryEventCreated) -> Self {
        Self::Created(e)
    }
}

impl From<WebhookDeliveryEventAttemptStarted> for WebhookDeliveryEvent {
    fn from(e: WebhookDeliveryEventAttemptStarted) -> Self {
        Self::AttemptStarted(e)
    }
}

impl From<WebhookDeliveryEventAttemptFinished> for WebhookDeliveryEvent {
    fn from(e: WebhookDeliveryEventAttemptFinished) -> Self {
        Self::AttemptFinished(e)
    }
}

impl From<WebhookDeliveryEventAborted> for WebhookDeliveryEvent {
    fn from(e: WebhookDeliveryEventAborted) -> Self {
        Self::Aborted(e)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
