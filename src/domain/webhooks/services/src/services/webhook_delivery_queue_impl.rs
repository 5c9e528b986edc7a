// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dill::{component, interface, scope, Singleton};
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct WebhookDeliveryQueueImpl {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    /// Entries eligible for pickup, oldest in front
    ready: VecDeque<QueueEntry>,
    /// Entries waiting for their due time, soonest on top
    delayed: BinaryHeap<Reverse<DelayedEntry>>,
    /// Endpoints with an attempt in flight
    busy_endpoints: HashSet<WebhookEndpointID>,
    /// Ties on equal due times break in scheduling order
    next_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    delivery_id: WebhookDeliveryID,
    endpoint_id: WebhookEndpointID,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct DelayedEntry {
    due: DateTime<Utc>,
    seq: u64,
    entry_delivery_id: WebhookDeliveryID,
    entry_endpoint_id: WebhookEndpointID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookDeliveryQueue)]
#[scope(Singleton)]
impl WebhookDeliveryQueueImpl {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookDeliveryQueue for WebhookDeliveryQueueImpl {
    fn enqueue(&self, delivery_id: WebhookDeliveryID, endpoint_id: WebhookEndpointID) {
        let mut guard = self.state.lock().unwrap();
        guard.ready.push_back(QueueEntry {
            delivery_id,
            endpoint_id,
        });
    }

    fn schedule_retry(
        &self,
        delivery_id: WebhookDeliveryID,
        endpoint_id: WebhookEndpointID,
        at: DateTime<Utc>,
    ) {
        let mut guard = self.state.lock().unwrap();
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.delayed.push(Reverse(DelayedEntry {
            due: at,
            seq,
            entry_delivery_id: delivery_id,
            entry_endpoint_id: endpoint_id,
        }));
    }

    fn take_next_ready(&self, now: DateTime<Utc>) -> Option<DequeuedWebhookDelivery> {
        let mut guard = self.state.lock().unwrap();

        // Promote everything whose due time has passed, preserving due order
        while let Some(Reverse(delayed)) = guard.delayed.peek().copied()
            && delayed.due <= now
        {
            guard.delayed.pop();
            guard.ready.push_back(QueueEntry {
                delivery_id: delayed.entry_delivery_id,
                endpoint_id: delayed.entry_endpoint_id,
            });
        }

        // First entry whose endpoint is free wins; entries behind a busy
        // endpoint wait in place so per-endpoint order is preserved
        let position = guard
            .ready
            .iter()
            .position(|entry| !guard.busy_endpoints.contains(&entry.endpoint_id))?;

        let entry = guard.ready.remove(position).unwrap();
        guard.busy_endpoints.insert(entry.endpoint_id);

        Some(DequeuedWebhookDelivery {
            delivery_id: entry.delivery_id,
            endpoint_id: entry.endpoint_id,
        })
    }

    fn release_endpoint(&self, endpoint_id: WebhookEndpointID) {
        let mut guard = self.state.lock().unwrap();
        guard.busy_endpoints.remove(&endpoint_id);
    }

    fn is_idle(&self) -> bool {
        let guard = self.state.lock().unwrap();
        guard.ready.is_empty() && guard.delayed.is_empty() && guard.busy_endpoints.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
