// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_internal_error::InternalError;
use thiserror::Error;

use crate::{EventID, Projection};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Common set of operations for an event store
#[async_trait::async_trait]
pub trait EventStore<Proj: Projection>: Send + Sync {
    /// Returns the number of events stored across all queries
    async fn len(&self) -> Result<usize, InternalError>;

    /// Returns the full event log in chronological order
    fn get_all_events(&self, opts: GetEventsOpts) -> EventStream<'_, Proj::Event>;

    /// Returns the event history matching a query in chronological order
    fn get_events(&self, query: &Proj::Query, opts: GetEventsOpts) -> EventStream<'_, Proj::Event>;

    /// Persists a series of events, performing an optimistic concurrency
    /// check against the last event stored for the same query
    async fn save_events(
        &self,
        query: &Proj::Query,
        prev_stored_event_id: Option<EventID>,
        events: Vec<Proj::Event>,
    ) -> Result<EventID, SaveEventsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type EventStream<'a, Event> = std::pin::Pin<
    Box<dyn tokio_stream::Stream<Item = Result<(EventID, Event), GetEventsError>> + Send + 'a>,
>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Clone, Copy)]
pub struct GetEventsOpts {
    /// Exclusive lower bound - to get events with IDs greater than this
    pub from: Option<EventID>,

    /// Inclusive upper bound - get events with IDs less or equal to this
    pub to: Option<EventID>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GetEventsError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SaveEventsError {
    #[error("Nothing to save")]
    NothingToSave,

    #[error(transparent)]
    ConcurrentModification(ConcurrentModificationError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Expected last stored event to be {expected:?}, but found {actual:?}")]
pub struct ConcurrentModificationError {
    pub expected: Option<EventID>,
    pub actual: Option<EventID>,
}
