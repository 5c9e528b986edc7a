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

/// Retry schedule of a delivery, snapshotted from the endpoint settings at
/// dispatch time so that later endpoint edits do not reshape deliveries
/// already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Cap on total attempts, the first one included
    pub max_attempts: u32,
    /// Delay before the first retry
    pub min_delay_seconds: u32,
    /// Delays never grow beyond this value (before jitter)
    pub max_delay_seconds: u32,
    pub backoff_type: RetryBackoffType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryBackoffType {
    Fixed,
    Linear,
    Exponential,
    ExponentialWithJitter,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl RetryPolicy {
    pub fn new(
        max_attempts: u32,
        min_delay_seconds: u32,
        max_delay_seconds: u32,
        backoff_type: RetryBackoffType,
    ) -> Self {
        Self {
            max_attempts,
            min_delay_seconds,
            max_delay_seconds,
            backoff_type,
        }
    }

    /// Computes when the next attempt may start, given how many attempts have
    /// already completed. `None` means the attempts are exhausted.
    pub fn next_attempt_at(
        &self,
        completed_attempts: u32,
        finished_at: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        if completed_attempts >= self.max_attempts {
            return None;
        }

        let delay_seconds = self.backoff_delay_seconds(completed_attempts);
        let delay = chrono::Duration::seconds(i64::try_from(delay_seconds).unwrap_or(i64::MAX));
        Some(finished_at + delay)
    }

    fn backoff_delay_seconds(&self, completed_attempts: u32) -> u64 {
        let min_delay = u64::from(self.min_delay_seconds);
        let max_delay = u64::from(self.max_delay_seconds);

        let raw = match self.backoff_type {
            RetryBackoffType::Fixed => min_delay,
            RetryBackoffType::Linear => min_delay.saturating_mul(u64::from(completed_attempts)),
            RetryBackoffType::Exponential | RetryBackoffType::ExponentialWithJitter => {
                // First retry waits the minimum delay, each following one
                // doubles it
                let exponent = completed_attempts.saturating_sub(1).min(63);
                min_delay.saturating_mul(1u64 << exponent)
            }
        };

        let capped = raw.min(max_delay);

        match self.backoff_type {
            RetryBackoffType::ExponentialWithJitter => Self::apply_jitter(capped),
            _ => capped,
        }
    }

    /// Spreads the delay uniformly within +-20% so that many deliveries
    /// scheduled at the same moment do not all retry at once
    fn apply_jitter(delay_seconds: u64) -> u64 {
        use rand::Rng;

        let span = delay_seconds / 5;
        if span == 0 {
            return delay_seconds;
        }
        rand::thread_rng().gen_range((delay_seconds - span)..=(delay_seconds + span))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
