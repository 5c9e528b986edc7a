// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use folio_event_sourcing::*;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Represents the state of a delivery at specific point in time (projection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookDeliveryState {
    /// Unique and stable identifier of this delivery
    pub delivery_id: WebhookDeliveryID,
    /// Transport the payload goes out on
    pub channel: DeliveryChannel,
    /// Captured event this delivery carries
    pub webhook_event_id: WebhookEventID,
    pub event_type: WebhookEventType,
    /// Retry schedule, snapshotted at dispatch time
    pub retry_policy: RetryPolicy,
    /// List of attempts to hand the payload over
    pub attempts: Vec<WebhookDeliveryAttempt>,
    /// Timing records
    pub timing: WebhookDeliveryTimingRecords,
    /// Failed delivery this one is a manual retry of, if any
    pub retry_of: Option<WebhookDeliveryID>,
    /// Set when the delivery was cut short
    pub abortion: Option<WebhookDeliveryAbortion>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WebhookDeliveryTimingRecords {
    /// Time when the delivery was created and queued
    pub created_at: DateTime<Utc>,

    /// Time when it's allowed to start the next attempt.
    /// Populated exactly while the delivery is retrying.
    pub next_attempt_at: Option<DateTime<Utc>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookDeliveryAbortion {
    pub aborted_at: DateTime<Utc>,
    pub reason: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookDeliveryState {
    /// Computes status
    pub fn status(&self) -> WebhookDeliveryStatus {
        if self.abortion.is_some() {
            return WebhookDeliveryStatus::Failed;
        }

        match self.attempts.last() {
            None => WebhookDeliveryStatus::Pending,
            Some(attempt) => match &attempt.attempt_result {
                // In-flight first attempt still counts as pending, later
                // in-flight attempts as retrying
                None if self.attempts.len() == 1 => WebhookDeliveryStatus::Pending,
                None => WebhookDeliveryStatus::Retrying,
                Some(_) if self.timing.next_attempt_at.is_some() => WebhookDeliveryStatus::Retrying,
                Some(result) if result.outcome.is_success() => WebhookDeliveryStatus::Sent,
                Some(_) => WebhookDeliveryStatus::Failed,
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn attempt_count(&self) -> u32 {
        u32::try_from(self.attempts.len()).unwrap()
    }

    pub fn webhook_endpoint_id(&self) -> WebhookEndpointID {
        self.channel.webhook_endpoint_id()
    }

    /// Status code of the most recent finished attempt, if a response arrived
    pub fn http_status_code(&self) -> Option<u16> {
        self.last_attempt_result()
            .and_then(|r| r.outcome.http_status_code())
    }

    /// Round-trip time of the most recent finished attempt
    pub fn response_time_ms(&self) -> Option<u64> {
        self.last_attempt_result()
            .and_then(|r| r.outcome.response_time_ms())
    }

    /// Human-readable reason of the most recent failure or abortion
    pub fn error_message(&self) -> Option<String> {
        if let Some(abortion) = &self.abortion {
            return Some(abortion.reason.clone());
        }
        self.last_attempt_result().and_then(|r| match &r.outcome {
            WebhookDeliveryAttemptOutcome::Failure(failure) => Some(failure.error_message.clone()),
            WebhookDeliveryAttemptOutcome::Success(_) => None,
        })
    }

    /// Computes the time when the delivery reached a terminal status, if it
    /// did
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        if let Some(abortion) = &self.abortion {
            return Some(abortion.aborted_at);
        }
        if self.is_finished() {
            self.last_attempt_result().map(|r| r.finished_at)
        } else {
            None
        }
    }

    fn last_attempt_result(&self) -> Option<&WebhookDeliveryAttemptResult> {
        self.attempts.last().and_then(|a| a.attempt_result.as_ref())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Projection for WebhookDeliveryState {
    type Query = WebhookDeliveryID;
    type Event = WebhookDeliveryEvent;

    fn apply(state: Option<Self>, event: Self::Event) -> Result<Self, ProjectionError<Self>> {
        use WebhookDeliveryEvent as E;

        match (state, event) {
            (None, event) => match event {
                E::Created(WebhookDeliveryEventCreated {
                    event_time,
                    delivery_id,
                    channel,
                    webhook_event_id,
                    event_type,
                    retry_policy,
                    retry_of,
                }) => Ok(Self {
                    delivery_id,
                    channel,
                    webhook_event_id,
                    event_type,
                    retry_policy,
                    attempts: vec![],
                    timing: WebhookDeliveryTimingRecords {
                        created_at: event_time,
                        next_attempt_at: None,
                    },
                    retry_of,
                    abortion: None,
                }),
                _ => Err(ProjectionError::new(None, event)),
            },
            (Some(s), event) => {
                assert_eq!(s.delivery_id, event.delivery_id());

                match event {
                    // An attempt may start while the delivery is non-terminal
                    // and no other attempt is in flight
                    E::AttemptStarted(WebhookDeliveryEventAttemptStarted { event_time, .. })
                        if !s.is_finished()
                            && s.attempts.last().is_none_or(|a| a.attempt_result.is_some()) =>
                    {
                        let mut attempts = s.attempts;
                        attempts.push(WebhookDeliveryAttempt {
                            attempt_number: u32::try_from(attempts.len()).unwrap() + 1,
                            started_at: event_time,
                            attempt_result: None,
                        });

                        Ok(Self { attempts, ..s })
                    }

                    // May finish only the attempt that is in flight
                    E::AttemptFinished(WebhookDeliveryEventAttemptFinished {
                        event_time,
                        outcome,
                        ..
                    }) if s.abortion.is_none()
                        && s.attempts.last().is_some_and(|a| a.attempt_result.is_none()) =>
                    {
                        let mut attempts = s.attempts;

                        // Compute if there will be a next attempt and when
                        let next_attempt_at = if outcome.is_success() {
                            None
                        } else {
                            s.retry_policy.next_attempt_at(
                                u32::try_from(attempts.len()).unwrap(),
                                event_time,
                            )
                        };

                        let last_attempt = attempts.last_mut().unwrap();
                        last_attempt.attempt_result = Some(WebhookDeliveryAttemptResult {
                            finished_at: event_time,
                            outcome,
                        });

                        Ok(Self {
                            attempts,
                            timing: WebhookDeliveryTimingRecords {
                                next_attempt_at,
                                ..s.timing
                            },
                            ..s
                        })
                    }

                    // May abort in all states except terminal ones
                    E::Aborted(WebhookDeliveryEventAborted {
                        event_time, reason, ..
                    }) if !s.is_finished() => Ok(Self {
                        abortion: Some(WebhookDeliveryAbortion {
                            aborted_at: event_time,
                            reason,
                        }),
                        timing: WebhookDeliveryTimingRecords {
                            next_attempt_at: None,
                            ..s.timing
                        },
                        ..s
                    }),

                    event => Err(ProjectionError::new(Some(s), event)),
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl ProjectionEvent<WebhookDeliveryID> for WebhookDeliveryEvent {
    fn matches_query(&self, query: &WebhookDeliveryID) -> bool {
        self.delivery_id() == *query
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
