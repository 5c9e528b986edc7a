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
pub struct WebhookEndpoint(
    Aggregate<WebhookEndpointState, (dyn WebhookEndpointEventStore + 'static)>,
);

impl WebhookEndpoint {
    /// Registers an endpoint
    pub fn new(
        now: DateTime<Utc>,
        endpoint_id: WebhookEndpointID,
        tenant_id: TenantID,
        endpoint_name: WebhookEndpointName,
        target_url: url::Url,
        event_types: Vec<WebhookEventType>,
        secret: WebhookEndpointSecret,
        timeout_seconds: u32,
        max_retries: u32,
    ) -> Self {
        Self(
            Aggregate::new(
                endpoint_id,
                WebhookEndpointEventCreated {
                    event_time: now,
                    endpoint_id,
                    tenant_id,
                    endpoint_name,
                    target_url,
                    event_types,
                    secret,
                    timeout_seconds,
                    max_retries,
                },
            )
            .unwrap(),
        )
    }

    pub async fn load(
        endpoint_id: WebhookEndpointID,
        event_store: &(dyn WebhookEndpointEventStore + 'static),
    ) -> Result<Self, LoadError<WebhookEndpointState>> {
        Aggregate::load(endpoint_id, event_store).await.map(Self)
    }

    pub async fn load_multi(
        endpoint_ids: Vec<WebhookEndpointID>,
        event_store: &(dyn WebhookEndpointEventStore + 'static),
    ) -> Result<Vec<Result<Self, LoadError<WebhookEndpointState>>>, GetEventsError> {
        let results = Aggregate::load_multi(endpoint_ids, event_store).await?;
        Ok(results.into_iter().map(|res| res.map(Self)).collect())
    }

    pub fn into_state(self) -> WebhookEndpointState {
        self.0.into_state()
    }

    /// Change operator-editable attributes. `None` keeps the current value.
    pub fn modify(
        &mut self,
        now: DateTime<Utc>,
        new_name: Option<WebhookEndpointName>,
        new_target_url: Option<url::Url>,
        new_event_types: Option<Vec<WebhookEventType>>,
        new_timeout_seconds: Option<u32>,
        new_max_retries: Option<u32>,
    ) -> Result<(), ProjectionError<WebhookEndpointState>> {
        let event = WebhookEndpointEventModified {
            event_time: now,
            endpoint_id: self.endpoint_id,
            endpoint_name: new_name,
            target_url: new_target_url,
            event_types: new_event_types,
            timeout_seconds: new_timeout_seconds,
            max_retries: new_max_retries,
        };
        self.apply(event)
    }

    /// Take the endpoint out of event fan-out without losing its history
    pub fn pause(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<(), ProjectionError<WebhookEndpointState>> {
        let event = WebhookEndpointEventPaused {
            event_time: now,
            endpoint_id: self.endpoint_id,
        };
        self.apply(event)
    }

    pub fn resume(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<(), ProjectionError<WebhookEndpointState>> {
        let event = WebhookEndpointEventResumed {
            event_time: now,
            endpoint_id: self.endpoint_id,
        };
        self.apply(event)
    }

    /// Replace the signing secret. Deliveries already in flight keep the
    /// signature computed with the previous secret.
    pub fn rotate_secret(
        &mut self,
        now: DateTime<Utc>,
        new_secret: WebhookEndpointSecret,
    ) -> Result<(), ProjectionError<WebhookEndpointState>> {
        let event = WebhookEndpointEventSecretRotated {
            event_time: now,
            endpoint_id: self.endpoint_id,
            new_secret,
        };
        self.apply(event)
    }

    pub fn remove(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<(), ProjectionError<WebhookEndpointState>> {
        let event = WebhookEndpointEventRemoved {
            event_time: now,
            endpoint_id: self.endpoint_id,
        };
        self.apply(event)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl std::ops::Deref for WebhookEndpoint {
    type Target = Aggregate<WebhookEndpointState, (dyn WebhookEndpointEventStore + 'static)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for WebhookEndpoint {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
