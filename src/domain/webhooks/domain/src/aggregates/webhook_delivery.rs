// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use folio_event_sourcing::*;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct WebhookDelivery(
    Aggregate<WebhookDeliveryState, (dyn WebhookDeliveryEventStore + 'static)>,
);

impl WebhookDelivery {
    /// Creates a delivery for one endpoint and one captured event
    pub fn new(
        now: DateTime<Utc>,
        delivery_id: WebhookDeliveryID,
        channel: DeliveryChannel,
        webhook_event_id: WebhookEventID,
        event_type: WebhookEventType,
        retry_policy: RetryPolicy,
        retry_of: Option<WebhookDeliveryID>,
    ) -> Self {
        Self(
            Aggregate::new(
                delivery_id,
                WebhookDeliveryEventCreated {
                    event_time: now,
                    delivery_id,
                    channel,
                    webhook_event_id,
                    event_type,
                    retry_policy,
                    retry_of,
                },
            )
            .unwrap(),
        )
    }

    pub async fn load(
        delivery_id: WebhookDeliveryID,
        event_store: &(dyn WebhookDeliveryEventStore + 'static),
    ) -> Result<Self, LoadError<WebhookDeliveryState>> {
        Aggregate::load(delivery_id, event_store).await.map(Self)
    }

    pub async fn load_multi(
        delivery_ids: Vec<WebhookDeliveryID>,
        event_store: &(dyn WebhookDeliveryEventStore + 'static),
    ) -> Result<Vec<Result<Self, LoadError<WebhookDeliveryState>>>, GetEventsError> {
        let results = Aggregate::load_multi(delivery_ids, event_store).await?;
        Ok(results.into_iter().map(|res| res.map(Self)).collect())
    }

    pub fn into_state(self) -> WebhookDeliveryState {
        self.0.into_state()
    }

    pub fn start_attempt(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<(), ProjectionError<WebhookDeliveryState>> {
        let event = WebhookDeliveryEventAttemptStarted {
            event_time: now,
            delivery_id: self.delivery_id,
        };
        self.apply(event)
    }

    pub fn finish_attempt(
        &mut self,
        now: DateTime<Utc>,
        outcome: WebhookDeliveryAttemptOutcome,
    ) -> Result<(), ProjectionError<WebhookDeliveryState>> {
        let event = WebhookDeliveryEventAttemptFinished {
            event_time: now,
            delivery_id: self.delivery_id,
            outcome,
        };
        self.apply(event)
    }

    /// Cut the delivery short without exhausting its attempts
    pub fn abort(
        &mut self,
        now: DateTime<Utc>,
        reason: impl Into<String>,
    ) -> Result<(), ProjectionError<WebhookDeliveryState>> {
        let event = WebhookDeliveryEventAborted {
            event_time: now,
            delivery_id: self.delivery_id,
            reason: reason.into(),
        };
        self.apply(event)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl std::ops::Deref for WebhookDelivery {
    type Target = Aggregate<WebhookDeliveryState, (dyn WebhookDeliveryEventStore + 'static)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for WebhookDelivery {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
