// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::hash_map::HashMap;

use dill::*;
use folio_event_sourcing::*;
use folio_webhooks::*;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryWebhookEndpointEventStore {
    inner: InMemoryEventStore<WebhookEndpointState, State>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    events: Vec<WebhookEndpointEvent>,
    endpoints_by_tenant: HashMap<TenantID, Vec<WebhookEndpointID>>,
    endpoint_data: HashMap<WebhookEndpointID, WebhookEndpoint>,
}

impl EventStoreState<WebhookEndpointState> for State {
    fn events_count(&self) -> usize {
        self.events.len()
    }

    fn get_events(&self) -> &[<WebhookEndpointState as Projection>::Event] {
        &self.events
    }

    fn add_event(&mut self, event: <WebhookEndpointState as Projection>::Event) {
        self.events.push(event);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookEndpointEventStore)]
#[scope(Singleton)]
impl InMemoryWebhookEndpointEventStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryEventStore::new(),
        }
    }

    fn update_index(state: &mut State, event: &WebhookEndpointEvent) -> Result<(), InternalError> {
        match event {
            WebhookEndpointEvent::Created(e) => {
                Self::check_unique_name_within_tenant(state, e.tenant_id, &e.endpoint_name, None)?;

                state
                    .endpoints_by_tenant
                    .entry(e.tenant_id)
                    .or_default()
                    .push(e.endpoint_id);

                let endpoint = WebhookEndpoint::new(
                    e.event_time,
                    e.endpoint_id,
                    e.tenant_id,
                    e.endpoint_name.clone(),
                    e.target_url.clone(),
                    e.event_types.clone(),
                    e.secret.clone(),
                    e.timeout_seconds,
                    e.max_retries,
                );
                state.endpoint_data.insert(e.endpoint_id, endpoint);
            }

            WebhookEndpointEvent::Modified(e) => {
                if let Some(new_name) = &e.endpoint_name
                    && let Some(endpoint) = state.endpoint_data.get(&e.endpoint_id)
                {
                    Self::check_unique_name_within_tenant(
                        state,
                        endpoint.tenant_id,
                        new_name,
                        Some(e.endpoint_id),
                    )?;
                }
                Self::update_endpoint_state(state, event);
            }

            _ => Self::update_endpoint_state(state, event),
        }

        Ok(())
    }

    fn check_unique_name_within_tenant(
        state: &State,
        tenant_id: TenantID,
        endpoint_name: &WebhookEndpointName,
        exclude_endpoint_id: Option<WebhookEndpointID>,
    ) -> Result<(), InternalError> {
        if let Some(ids) = state.endpoints_by_tenant.get(&tenant_id)
            && ids
                .iter()
                .filter(|id| Some(**id) != exclude_endpoint_id)
                .any(|id| {
                    state
                        .endpoint_data
                        .get(id)
                        .is_some_and(|endpoint| endpoint.endpoint_name == *endpoint_name)
                })
        {
            #[derive(Error, Debug)]
            #[error(
                "Webhook endpoint name `{endpoint_name}` is not unique for tenant `{tenant_id}`"
            )]
            struct NonUniqueNameError {
                endpoint_name: WebhookEndpointName,
                tenant_id: TenantID,
            }

            return Err(NonUniqueNameError {
                endpoint_name: endpoint_name.clone(),
                tenant_id,
            }
            .int_err());
        }

        Ok(())
    }

    fn update_endpoint_state(state: &mut State, event: &WebhookEndpointEvent) {
        if let Some(endpoint) = state.endpoint_data.get_mut(&event.endpoint_id()) {
            endpoint.apply(event.clone()).unwrap();

            if endpoint.is_removed() {
                let tenant_id = endpoint.tenant_id;
                if let Some(ids) = state.endpoints_by_tenant.get_mut(&tenant_id) {
                    ids.retain(|id| *id != event.endpoint_id());
                }
            }
        } else {
            panic!(
                "WebhookEndpointEvent {} for unknown endpoint {}",
                event.typename(),
                event.endpoint_id()
            );
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl EventStore<WebhookEndpointState> for InMemoryWebhookEndpointEventStore {
    async fn len(&self) -> Result<usize, InternalError> {
        self.inner.len().await
    }

    fn get_all_events(&self, opts: GetEventsOpts) -> EventStream<'_, WebhookEndpointEvent> {
        self.inner.get_all_events(opts)
    }

    fn get_events(
        &self,
        endpoint_id: &WebhookEndpointID,
        opts: GetEventsOpts,
    ) -> EventStream<'_, WebhookEndpointEvent> {
        self.inner.get_events(endpoint_id, opts)
    }

    async fn save_events(
        &self,
        endpoint_id: &WebhookEndpointID,
        maybe_prev_stored_event_id: Option<EventID>,
        events: Vec<WebhookEndpointEvent>,
    ) -> Result<EventID, SaveEventsError> {
        if events.is_empty() {
            return Err(SaveEventsError::NothingToSave);
        }

        {
            let state = self.inner.as_state();
            let mut g = state.lock().unwrap();
            for event in &events {
                Self::update_index(&mut g, event)?;
            }
        }

        self.inner
            .save_events(endpoint_id, maybe_prev_stored_event_id, events)
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookEndpointEventStore for InMemoryWebhookEndpointEventStore {
    async fn list_endpoint_ids_by_tenant(
        &self,
        tenant_id: TenantID,
        pagination: PaginationOpts,
    ) -> Result<Vec<WebhookEndpointID>, ListWebhookEndpointsError> {
        let state = self.inner.as_state();
        let g = state.lock().unwrap();
        Ok(g.endpoints_by_tenant
            .get(&tenant_id)
            .map(|ids| {
                ids.iter()
                    .skip(pagination.offset)
                    .take(pagination.limit)
                    .copied()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_endpoints_by_tenant(
        &self,
        tenant_id: TenantID,
    ) -> Result<usize, CountWebhookEndpointsError> {
        let state = self.inner.as_state();
        let g = state.lock().unwrap();
        Ok(g.endpoints_by_tenant
            .get(&tenant_id)
            .map(Vec::len)
            .unwrap_or_default())
    }

    async fn find_endpoint_id_by_tenant_and_name(
        &self,
        tenant_id: TenantID,
        endpoint_name: &WebhookEndpointName,
    ) -> Result<Option<WebhookEndpointID>, FindWebhookEndpointError> {
        let state = self.inner.as_state();
        let g = state.lock().unwrap();
        let maybe_endpoint_id = g.endpoints_by_tenant.get(&tenant_id).and_then(|ids| {
            ids.iter()
                .find(|id| {
                    g.endpoint_data
                        .get(id)
                        .is_some_and(|endpoint| endpoint.endpoint_name == *endpoint_name)
                })
                .copied()
        });
        Ok(maybe_endpoint_id)
    }

    async fn list_enabled_endpoint_ids_by_tenant_and_event_type(
        &self,
        tenant_id: TenantID,
        event_type: &WebhookEventType,
    ) -> Result<Vec<WebhookEndpointID>, ListWebhookEndpointsError> {
        let state = self.inner.as_state();
        let g = state.lock().unwrap();
        let maybe_endpoint_ids = g.endpoints_by_tenant.get(&tenant_id).map(|ids| {
            ids.iter()
                .filter(|id| {
                    g.endpoint_data.get(id).is_some_and(|endpoint| {
                        endpoint.is_active() && endpoint.is_subscribed_to(event_type)
                    })
                })
                .copied()
                .collect::<Vec<_>>()
        });
        Ok(maybe_endpoint_ids.unwrap_or_default())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
