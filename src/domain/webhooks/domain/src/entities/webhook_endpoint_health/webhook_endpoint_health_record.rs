// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Running totals of terminal delivery outcomes for one endpoint.
///
/// Pings update only the `last_ping_*` fields and never the counters, so test
/// traffic does not skew the success rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpointHealthRecord {
    pub endpoint_id: WebhookEndpointID,
    /// Deliveries that ended as `Sent`
    pub success_count: u64,
    /// Deliveries that ended as `Failed`
    pub failure_count: u64,
    pub last_ping_at: Option<DateTime<Utc>>,
    pub last_ping_status: Option<WebhookPingStatus>,
}

impl WebhookEndpointHealthRecord {
    pub fn new(endpoint_id: WebhookEndpointID) -> Self {
        Self {
            endpoint_id,
            success_count: 0,
            failure_count: 0,
            last_ping_at: None,
            last_ping_status: None,
        }
    }

    pub fn total_count(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// Share of terminal deliveries that succeeded, 1.0 when there were none
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 1.0;
        }
        self.success_count as f64 / total as f64
    }

    /// Derives the health tier. Endpoints with fewer than `min_sample_size`
    /// terminal deliveries are not judged at all.
    pub fn health_status(&self, min_sample_size: u64) -> WebhookEndpointHealthStatus {
        let total = self.total_count();
        if total < min_sample_size {
            return WebhookEndpointHealthStatus::Unknown;
        }

        // Integer comparison sidesteps float rounding at the tier boundaries:
        // rate >= P/100  <=>  successes * 100 >= total * P
        let scaled = self.success_count * 100;
        if scaled >= total * 95 {
            WebhookEndpointHealthStatus::Excellent
        } else if scaled >= total * 80 {
            WebhookEndpointHealthStatus::Good
        } else if scaled >= total * 60 {
            WebhookEndpointHealthStatus::Warning
        } else {
            WebhookEndpointHealthStatus::Critical
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
