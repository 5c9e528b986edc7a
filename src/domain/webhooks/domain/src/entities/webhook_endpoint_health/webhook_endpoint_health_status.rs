// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Health tier derived from the terminal success rate of an endpoint.
/// Never stored, always recomputed from the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEndpointHealthStatus {
    /// Too few terminal deliveries to judge
    Unknown,
    /// Success rate >= 95%
    Excellent,
    /// Success rate >= 80%
    Good,
    /// Success rate >= 60%
    Warning,
    /// Success rate < 60%
    Critical,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Outcome of the most recent operator-triggered test delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookPingStatus {
    Success,
    Failed,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
