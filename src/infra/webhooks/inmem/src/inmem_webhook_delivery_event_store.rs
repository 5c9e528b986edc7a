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

pub struct InMemoryWebhookDeliveryEventStore {
    inner: InMemoryEventStore<WebhookDeliveryState, State>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    events: Vec<WebhookDeliveryEvent>,
    // Insertion order doubles as creation order within an endpoint
    delivery_ids_by_endpoint: HashMap<WebhookEndpointID, Vec<WebhookDeliveryID>>,
    delivery_data: HashMap<WebhookDeliveryID, WebhookDelivery>,
}

impl EventStoreState<WebhookDeliveryState> for State {
    fn events_count(&self) -> usize {
        self.events.len()
    }

    fn get_events(&self) -> &[<WebhookDeliveryState as Projection>::Event] {
        &self.events
    }

    fn add_event(&mut self, event: <WebhookDeliveryState as Projection>::Event) {
        self.events.push(event);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn WebhookDeliveryEventStore)]
#[scope(Singleton)]
impl InMemoryWebhookDeliveryEventStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryEventStore::new(),
        }
    }

    fn update_index(state: &mut State, event: &WebhookDeliveryEvent) -> Result<(), InternalError> {
        match event {
            WebhookDeliveryEvent::Created(e) => {
                if state.delivery_data.contains_key(&e.delivery_id) {
                    #[derive(Error, Debug)]
                    #[error("Webhook delivery `{delivery_id}` already exists")]
                    struct DuplicateDeliveryError {
                        delivery_id: WebhookDeliveryID,
                    }

                    return Err(DuplicateDeliveryError {
                        delivery_id: e.delivery_id,
                    }
                    .int_err());
                }

                state
                    .delivery_ids_by_endpoint
                    .entry(e.channel.webhook_endpoint_id())
                    .or_default()
                    .push(e.delivery_id);

                let delivery = WebhookDelivery::new(
                    e.event_time,
                    e.delivery_id,
                    e.channel,
                    e.webhook_event_id,
                    e.event_type.clone(),
                    e.retry_policy,
                    e.retry_of,
                );
                state.delivery_data.insert(e.delivery_id, delivery);
            }

            _ => {
                if let Some(delivery) = state.delivery_data.get_mut(&event.delivery_id()) {
                    delivery.apply(event.clone()).unwrap();
                } else {
                    panic!(
                        "WebhookDeliveryEvent {} for unknown delivery {}",
                        event.typename(),
                        event.delivery_id()
                    );
                }
            }
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl EventStore<WebhookDeliveryState> for InMemoryWebhookDeliveryEventStore {
    async fn len(&self) -> Result<usize, InternalError> {
        self.inner.len().await
    }

    fn get_all_events(&self, opts: GetEventsOpts) -> EventStream<'_, WebhookDeliveryEvent> {
        self.inner.get_all_events(opts)
    }

    fn get_events(
        &self,
        delivery_id: &WebhookDeliveryID,
        opts: GetEventsOpts,
    ) -> EventStream<'_, WebhookDeliveryEvent> {
        self.inner.get_events(delivery_id, opts)
    }

    async fn save_events(
        &self,
        delivery_id: &WebhookDeliveryID,
        maybe_prev_stored_event_id: Option<EventID>,
        events: Vec<WebhookDeliveryEvent>,
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
            .save_events(delivery_id, maybe_prev_stored_event_id, events)
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl WebhookDeliveryEventStore for InMemoryWebhookDeliveryEventStore {
    async fn list_deliveries_by_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
        filters: &WebhookDeliveryFilters,
        pagination: PaginationOpts,
    ) -> Result<WebhookDeliveryListing, ListWebhookDeliveriesError> {
        let state = self.inner.as_state();
        let g = state.lock().unwrap();

        let matching_ids: Vec<WebhookDeliveryID> = g
            .delivery_ids_by_endpoint
            .get(&endpoint_id)
            .map(|ids| {
                ids.iter()
                    .rev()
                    .filter(|id| {
                        g.delivery_data
                            .get(id)
                            .is_some_and(|delivery| filters.matches(delivery.as_state()))
                    })
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        let total_count = matching_ids.len();
        let deliveries = matching_ids
            .iter()
            .skip(pagination.offset)
            .take(pagination.limit)
            .filter_map(|id| g.delivery_data.get(id))
            .map(|delivery| delivery.as_state().clone())
            .collect();

        Ok(WebhookDeliveryListing {
            deliveries,
            total_count,
        })
    }

    async fn list_failed_delivery_ids_by_endpoint(
        &self,
        endpoint_id: WebhookEndpointID,
    ) -> Result<Vec<WebhookDeliveryID>, ListWebhookDeliveriesError> {
        let state = self.inner.as_state();
        let g = state.lock().unwrap();
        Ok(g.delivery_ids_by_endpoint
            .get(&endpoint_id)
            .map(|ids| {
                ids.iter()
                    .filter(|id| {
                        g.delivery_data.get(id).is_some_and(|delivery| {
                            delivery.status() == WebhookDeliveryStatus::Failed
                        })
                    })
                    .copied()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
