// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_WEBHOOK_WORKER_COUNT: usize = 4;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECONDS: u32 = 10;
pub const DEFAULT_WEBHOOK_MAX_RETRIES: u32 = 3;
pub const DEFAULT_WEBHOOK_RETRY_MIN_DELAY_SECONDS: u32 = 30;
pub const DEFAULT_WEBHOOK_RETRY_MAX_DELAY_SECONDS: u32 = 3600;
pub const DEFAULT_WEBHOOK_HEALTH_MIN_SAMPLE_SIZE: u64 = 5;
pub const DEFAULT_WEBHOOK_AGENT_POLL_INTERVAL_SECONDS: u32 = 1;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct WebhooksConfig {
    /// Number of deliveries the agent may run concurrently
    pub worker_count: usize,

    /// Request timeout applied to endpoints that do not specify their own
    pub default_timeout_seconds: u32,

    /// Total attempt cap applied to endpoints that do not specify their own
    pub default_max_retries: u32,

    /// First retry delay, doubled on each subsequent failure
    pub retry_min_delay_seconds: u32,

    /// Retry delays never exceed this value (before jitter)
    pub retry_max_delay_seconds: u32,

    /// Endpoints with fewer terminal deliveries than this report an unknown
    /// health status
    pub health_min_sample_size: u64,

    /// How long the delivery agent sleeps between queue sweeps
    pub agent_poll_interval_seconds: u32,
}

impl WebhooksConfig {
    pub fn new(
        worker_count: usize,
        default_timeout_seconds: u32,
        default_max_retries: u32,
        retry_min_delay_seconds: u32,
        retry_max_delay_seconds: u32,
        health_min_sample_size: u64,
        agent_poll_interval_seconds: u32,
    ) -> Self {
        Self {
            worker_count,
            default_timeout_seconds,
            default_max_retries,
            retry_min_delay_seconds,
            retry_max_delay_seconds,
            health_min_sample_size,
            agent_poll_interval_seconds,
        }
    }
}

impl Default for WebhooksConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WEBHOOK_WORKER_COUNT,
            default_timeout_seconds: DEFAULT_WEBHOOK_TIMEOUT_SECONDS,
            default_max_retries: DEFAULT_WEBHOOK_MAX_RETRIES,
            retry_min_delay_seconds: DEFAULT_WEBHOOK_RETRY_MIN_DELAY_SECONDS,
            retry_max_delay_seconds: DEFAULT_WEBHOOK_RETRY_MAX_DELAY_SECONDS,
            health_min_sample_size: DEFAULT_WEBHOOK_HEALTH_MIN_SAMPLE_SIZE,
            agent_poll_interval_seconds: DEFAULT_WEBHOOK_AGENT_POLL_INTERVAL_SECONDS,
        }
    }
}
