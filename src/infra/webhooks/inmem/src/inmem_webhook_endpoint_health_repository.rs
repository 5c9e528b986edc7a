// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dill::*;
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryWebhookEndpointHealthRepository {
    state: Arc<Mutex<State>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    records_by_endpoint_ids: HashMap<WebhookEndpointID, WebhookEndpointHealthRecord>,
}

impl State {
    fn new() -> Self {
        Self {
            records_by_endpoint_ids: HashMap::new(),
        }
    }

    fn record_mut(&mut self, endpoint_id: WebhookEndpointID) -> &mut WebhookEndpointHealthRecord {
        self.records_by_endpoint_ids
            .entry(endpoint_id)
            .or_insert_with(|| WebhookEndpointHealthRecord::new(endpoint_id))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookEndpointHealthRepository)]
#[scope(Singleton)]
impl InMemoryWebhookEndpointHealthRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::new())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookEndpointHealthRepository for InMemoryWebhookEndpointHealthRepository {
    async fn increment_success(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealthRecord, UpdateWebhookEndpointHealthError> {
        let mut guard = self.state.lock().unwrap();
        let record = guard.record_mut(endpoint_id);
        record.success_count += 1;
        Ok(record.clone())
    }

    async fn increment_failure(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealthRecord, UpdateWebhookEndpointHealthError> {
        let mut guard = self.state.lock().unwrap();
        let record = guard.record_mut(endpoint_id);
        record.failure_count += 1;
        Ok(record.clone())
    }

    async fn record_ping(
        &self,
        endpoint_id: WebhookEndpointID,
        pinged_at: DateTime<Utc>,
        status: WebhookPingStatus,
    ) -> Result<(), UpdateWebhookEndpointHealthError> {
        let mut guard = self.state.lock().unwrap();
        let record = guard.record_mut(endpoint_id);
        record.last_ping_at = Some(pinged_at);
        record.last_ping_status = Some(status);
        Ok(())
    }

    async fn get_health(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<WebhookEndpointHealthRecord, GetWebhookEndpointHealthError> {
        let guard = self.state.lock().unwrap();
        Ok(guard
            .records_by_endpoint_ids
            .get(&endpoint_id)
            .cloned()
            .unwrap_or_else(|| WebhookEndpointHealthRecord::new(endpoint_id)))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
