// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Drives the delivery queue with a bounded pool of worker tasks.
#[async_trait::async_trait]
pub trait WebhookDeliveryAgent: Send + Sync {
    /// Runs the delivery loop until the process shuts down.
    async fn run(&self) -> Result<(), InternalError>;

    /// Processes ready deliveries until nothing actionable remains, then
    /// returns the number of attempts executed. Deliveries waiting on a
    /// future retry moment are left in the queue.
    async fn run_until_idle(&self) -> Result<usize, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
