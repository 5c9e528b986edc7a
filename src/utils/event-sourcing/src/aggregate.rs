// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::marker::PhantomData;

use folio_internal_error::InternalError;
use thiserror::Error;

use crate::{
    EventID,
    EventStore,
    GetEventsError,
    GetEventsOpts,
    Projection,
    ProjectionError,
    SaveEventsError,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A projection together with its position in the event store and the events
/// applied locally but not yet persisted.
///
/// Domain aggregates wrap this type in a newtype and expose intention-named
/// mutators that construct events and feed them through [`Aggregate::apply`].
pub struct Aggregate<Proj: Projection, Store: EventStore<Proj> + ?Sized> {
    query: Proj::Query,
    state: Proj,
    pending_events: Vec<Proj::Event>,
    last_stored_event_id: Option<EventID>,
    _store: PhantomData<Store>,
}

impl<Proj: Projection, Store: EventStore<Proj> + ?Sized> Aggregate<Proj, Store> {
    pub fn new(
        query: Proj::Query,
        genesis_event: impl Into<Proj::Event>,
    ) -> Result<Self, ProjectionError<Proj>> {
        let genesis_event = genesis_event.into();
        let state = Proj::apply(None, genesis_event.clone())?;
        Ok(Self {
            query,
            state,
            pending_events: vec![genesis_event],
            last_stored_event_id: None,
            _store: PhantomData,
        })
    }

    /// Initializes the aggregate from the event history
    #[tracing::instrument(
        level = "debug",
        name = "load",
        skip_all,
        fields(
            agg_type = %std::any::type_name::<Proj>(),
            query = ?query,
        )
    )]
    pub async fn load(query: Proj::Query, event_store: &Store) -> Result<Self, LoadError<Proj>> {
        use tokio_stream::StreamExt;

        let mut event_stream = event_store.get_events(&query, GetEventsOpts::default());

        let mut state: Option<Proj> = None;
        let mut last_stored_event_id = None;
        let mut num_events = 0;

        while let Some(res) = event_stream.next().await {
            let (event_id, event) = res?;
            state = Some(Proj::apply(state, event)?);
            last_stored_event_id = Some(event_id);
            num_events += 1;
        }

        let Some(state) = state else {
            return Err(AggregateNotFoundError::new(query).into());
        };

        tracing::debug!(num_events, ?last_stored_event_id, "Loaded aggregate");

        Ok(Self {
            query,
            state,
            pending_events: Vec::new(),
            last_stored_event_id,
            _store: PhantomData,
        })
    }

    /// Loads multiple aggregates, reporting per-query failures individually
    pub async fn load_multi(
        queries: Vec<Proj::Query>,
        event_store: &Store,
    ) -> Result<Vec<Result<Self, LoadError<Proj>>>, GetEventsError> {
        let mut results = Vec::with_capacity(queries.len());
        for query in queries {
            results.push(Self::load(query, event_store).await);
        }
        Ok(results)
    }

    /// Applies new events that might have been stored by others since the
    /// aggregate was loaded.
    ///
    /// Will panic if the aggregate has pending updates
    pub async fn update(&mut self, event_store: &Store) -> Result<(), UpdateError<Proj>> {
        use tokio_stream::StreamExt;

        assert!(!self.has_updates());

        let mut event_stream = event_store.get_events(
            &self.query,
            GetEventsOpts {
                from: self.last_stored_event_id,
                to: None,
            },
        );

        while let Some(res) = event_stream.next().await {
            let (event_id, event) = res?;
            self.state = Proj::apply(Some(self.state.clone()), event)?;
            self.last_stored_event_id = Some(event_id);
        }

        Ok(())
    }

    /// Checks whether the event is legal for the current state and adds it to
    /// the pending set
    pub fn apply(&mut self, event: impl Into<Proj::Event>) -> Result<(), ProjectionError<Proj>> {
        let event = event.into();
        let new_state = Proj::apply(Some(self.state.clone()), event.clone())?;
        self.state = new_state;
        self.pending_events.push(event);
        Ok(())
    }

    /// Persists pending events. Does nothing when there are none.
    #[tracing::instrument(
        level = "debug",
        name = "save",
        skip_all,
        fields(
            agg_type = %std::any::type_name::<Proj>(),
            query = ?self.query,
        )
    )]
    pub async fn save(&mut self, event_store: &Store) -> Result<(), SaveEventsError> {
        if self.pending_events.is_empty() {
            return Ok(());
        }

        let num_events = self.pending_events.len();
        let last_stored_event_id = event_store
            .save_events(
                &self.query,
                self.last_stored_event_id,
                self.pending_events.clone(),
            )
            .await?;

        self.pending_events.clear();
        self.last_stored_event_id = Some(last_stored_event_id);

        tracing::debug!(num_events, %last_stored_event_id, "Saved aggregate");

        Ok(())
    }

    pub fn query(&self) -> &Proj::Query {
        &self.query
    }

    pub fn last_stored_event_id(&self) -> Option<EventID> {
        self.last_stored_event_id
    }

    pub fn has_updates(&self) -> bool {
        !self.pending_events.is_empty()
    }

    pub fn as_state(&self) -> &Proj {
        &self.state
    }

    pub fn into_state(self) -> Proj {
        self.state
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<Proj: Projection, Store: EventStore<Proj> + ?Sized> AsRef<Proj> for Aggregate<Proj, Store> {
    fn as_ref(&self) -> &Proj {
        &self.state
    }
}

impl<Proj: Projection, Store: EventStore<Proj> + ?Sized> std::ops::Deref
    for Aggregate<Proj, Store>
{
    type Target = Proj;

    fn deref(&self) -> &Proj {
        &self.state
    }
}

impl<Proj: Projection, Store: EventStore<Proj> + ?Sized> std::fmt::Debug
    for Aggregate<Proj, Store>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregate")
            .field("query", &self.query)
            .field("state", &self.state)
            .field("pending_events", &self.pending_events)
            .field("last_stored_event_id", &self.last_stored_event_id)
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum LoadError<Proj: Projection> {
    #[error(transparent)]
    NotFound(#[from] AggregateNotFoundError<Proj::Query>),

    #[error(transparent)]
    ProjectionError(#[from] ProjectionError<Proj>),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl<Proj: Projection> From<GetEventsError> for LoadError<Proj> {
    fn from(e: GetEventsError) -> Self {
        match e {
            GetEventsError::Internal(e) => Self::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum UpdateError<Proj: Projection> {
    #[error(transparent)]
    ProjectionError(#[from] ProjectionError<Proj>),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl<Proj: Projection> From<GetEventsError> for UpdateError<Proj> {
    fn from(e: GetEventsError) -> Self {
        match e {
            GetEventsError::Internal(e) => Self::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Aggregate not found by query: {query:?}")]
pub struct AggregateNotFoundError<Query: std::fmt::Debug> {
    pub query: Query,
}

impl<Query: std::fmt::Debug> AggregateNotFoundError<Query> {
    pub fn new(query: Query) -> Self {
        Self { query }
    }
}
