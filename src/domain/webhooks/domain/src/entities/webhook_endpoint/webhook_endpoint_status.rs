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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEndpointStatus {
    /// Endpoint participates in event fan-out
    Enabled,
    /// Endpoint is skipped by fan-out, but keeps its history and secret
    Paused,
    /// Endpoint is soft-removed: fan-out skips it, mutations are rejected,
    /// history remains queryable
    Removed,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
