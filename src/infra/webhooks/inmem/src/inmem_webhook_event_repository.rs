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

use dill::*;
use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryWebhookEventRepository {
    state: Arc<Mutex<State>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    events_by_ids: HashMap<WebhookEventID, WebhookEvent>,
}

impl State {
    fn new() -> Self {
        Self {
            events_by_ids: HashMap::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookEventRepository)]
#[scope(Singleton)]
impl InMemoryWebhookEventRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::new())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookEventRepository for InMemoryWebhookEventRepository {
    async fn create_event(&self, event: &WebhookEvent) -> Result<(), CreateWebhookEventError> {
        let mut guard = self.state.lock().unwrap();
        if guard.events_by_ids.contains_key(&event.event_id) {
            return Err(CreateWebhookEventError::DuplicateId(
                WebhookEventDuplicateIDError {
                    event_id: event.event_id,
                },
            ));
        }

        guard.events_by_ids.insert(event.event_id, event.clone());
        Ok(())
    }

    async fn get_event(
        &self,
        event_id: WebhookEventID,
    ) -> Result<WebhookEvent, GetWebhookEventError> {
        let guard = self.state.lock().unwrap();
        if let Some(existing_event) = guard.events_by_ids.get(&event_id) {
            return Ok(existing_event.clone());
        }
        Err(GetWebhookEventError::NotFound(WebhookEventNotFoundError {
            event_id,
        }))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
