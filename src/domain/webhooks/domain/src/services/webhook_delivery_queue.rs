// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::{WebhookDeliveryID, WebhookEndpointID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// In-process scheduling queue feeding the delivery agent.
///
/// Entries for the same endpoint are handed out one at a time: after
/// `take_next_ready` returns an entry, further entries for that endpoint are
/// withheld until `release_endpoint` is called. Entries for different
/// endpoints are handed out in the order they became ready.
pub trait WebhookDeliveryQueue: Send + Sync {
    /// Makes a delivery immediately eligible for pickup.
    fn enqueue(&self, delivery_id: WebhookDeliveryID, endpoint_id: WebhookEndpointID);

    /// Makes a delivery eligible for pickup once `at` is reached.
    fn schedule_retry(
        &self,
        delivery_id: WebhookDeliveryID,
        endpoint_id: WebhookEndpointID,
        at: DateTime<Utc>,
    );

    /// Pops the next due delivery whose endpoint has no attempt in flight,
    /// marking that endpoint busy.
    fn take_next_ready(&self, now: DateTime<Utc>) -> Option<DequeuedWebhookDelivery>;

    /// Clears the busy mark left by `take_next_ready`.
    fn release_endpoint(&self, endpoint_id: WebhookEndpointID);

    /// `true` when no entries are queued, scheduled, or in flight.
    fn is_idle(&self) -> bool;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DequeuedWebhookDelivery {
    pub delivery_id: WebhookDeliveryID,
    pub endpoint_id: WebhookEndpointID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
