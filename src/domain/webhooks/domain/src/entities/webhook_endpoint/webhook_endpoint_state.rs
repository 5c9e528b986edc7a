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

/// Represents the state of a registered endpoint at specific point in time
/// (projection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpointState {
    /// Unique and stable identifier of this endpoint
    pub endpoint_id: WebhookEndpointID,
    /// Owning tenant
    pub tenant_id: TenantID,
    /// Name, unique within the tenant
    pub endpoint_name: WebhookEndpointName,
    /// Receiver URL webhooks are POSTed to
    pub target_url: url::Url,
    /// Event types this endpoint subscribes to
    pub event_types: Vec<WebhookEventType>,
    /// Current signing secret
    pub secret: WebhookEndpointSecret,
    /// Per-request timeout
    pub timeout_seconds: u32,
    /// Cap on total delivery attempts
    pub max_retries: u32,
    /// Lifecycle status
    pub status: WebhookEndpointStatus,
    /// Time when the endpoint was registered
    pub created_at: DateTime<Utc>,
}

impl WebhookEndpointState {
    /// Active endpoints participate in event fan-out
    pub fn is_active(&self) -> bool {
        self.status == WebhookEndpointStatus::Enabled
    }

    pub fn is_removed(&self) -> bool {
        self.status == WebhookEndpointStatus::Removed
    }

    pub fn is_subscribed_to(&self, event_type: &WebhookEventType) -> bool {
        self.event_types.contains(event_type)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Projection for WebhookEndpointState {
    type Query = WebhookEndpointID;
    type Event = WebhookEndpointEvent;

    fn apply(state: Option<Self>, event: Self::Event) -> Result<Self, ProjectionError<Self>> {
        use WebhookEndpointEvent as E;

        match (state, event) {
            (None, event) => match event {
                E::Created(WebhookEndpointEventCreated {
                    event_time,
                    endpoint_id,
                    tenant_id,
                    endpoint_name,
                    target_url,
                    event_types,
                    secret,
                    timeout_seconds,
                    max_retries,
                }) => Ok(Self {
                    endpoint_id,
                    tenant_id,
                    endpoint_name,
                    target_url,
                    event_types,
                    secret,
                    timeout_seconds,
                    max_retries,
                    status: WebhookEndpointStatus::Enabled,
                    created_at: event_time,
                }),
                _ => Err(ProjectionError::new(None, event)),
            },
            (Some(s), event) => {
                assert_eq!(s.endpoint_id, event.endpoint_id());

                match event {
                    // Attributes may change at any point before removal
                    E::Modified(WebhookEndpointEventModified {
                        endpoint_name,
                        target_url,
                        event_types,
                        timeout_seconds,
                        max_retries,
                        ..
                    }) if !s.is_removed() => Ok(Self {
                        endpoint_name: endpoint_name.unwrap_or(s.endpoint_name),
                        target_url: target_url.unwrap_or(s.target_url),
                        event_types: event_types.unwrap_or(s.event_types),
                        timeout_seconds: timeout_seconds.unwrap_or(s.timeout_seconds),
                        max_retries: max_retries.unwrap_or(s.max_retries),
                        ..s
                    }),

                    // Pausing requires an enabled endpoint
                    E::Paused(_) if s.status == WebhookEndpointStatus::Enabled => Ok(Self {
                        status: WebhookEndpointStatus::Paused,
                        ..s
                    }),

                    // Resuming requires a paused endpoint
                    E::Resumed(_) if s.status == WebhookEndpointStatus::Paused => Ok(Self {
                        status: WebhookEndpointStatus::Enabled,
                        ..s
                    }),

                    // Rotation replaces the secret for all future deliveries.
                    // Attempts already in flight keep the signature they were
                    // sent with.
                    E::SecretRotated(WebhookEndpointEventSecretRotated { new_secret, .. })
                        if !s.is_removed() =>
                    {
                        Ok(Self {
                            secret: new_secret,
                            ..s
                        })
                    }

                    // Removal is terminal
                    E::Removed(_) if !s.is_removed() => Ok(Self {
                        status: WebhookEndpointStatus::Removed,
                        ..s
                    }),

                    event => Err(ProjectionError::new(Some(s), event)),
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl ProjectionEvent<WebhookEndpointID> for WebhookEndpointEvent {
    fn matches_query(&self, query: &WebhookEndpointID) -> bool {
        self.endpoint_id() == *query
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
