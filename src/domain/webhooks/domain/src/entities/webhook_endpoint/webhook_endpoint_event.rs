// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEndpointEvent {
    Created(WebhookEndpointEventCreated),
    Modified(WebhookEndpointEventModified),
    Paused(WebhookEndpointEventPaused),
    Resumed(WebhookEndpointEventResumed),
    SecretRotated(WebhookEndpointEventSecretRotated),
    Removed(WebhookEndpointEventRemoved),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointEventCreated {
    pub event_time: DateTime<Utc>,
    pub endpoint_id: WebhookEndpointID,
    pub tenant_id: TenantID,
    pub endpoint_name: WebhookEndpointName,
    pub target_url: url::Url,
    pub event_types: Vec<WebhookEventType>,
    pub secret: WebhookEndpointSecret,
    pub timeout_seconds: u32,
    pub max_retries: u32,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Operator-editable attributes. Absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointEventModified {
    pub event_time: DateTime<Utc>,
    pub endpoint_id: WebhookEndpointID,
    pub endpoint_name: Option<WebhookEndpointName>,
    pub target_url: Option<url::Url>,
    pub event_types: Option<Vec<WebhookEventType>>,
    pub timeout_seconds: Option<u32>,
    pub max_retries: Option<u32>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointEventPaused {
    pub event_time: DateTime<Utc>,
    pub endpoint_id: WebhookEndpointID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointEventResumed {
    pub event_time: DateTime<Utc>,
    pub endpoint_id: WebhookEndpointID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointEventSecretRotated {
    pub event_time: DateTime<Utc>,
    pub endpoint_id: WebhookEndpointID,
    pub new_secret: WebhookEndpointSecret,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointEventRemoved {
    pub event_time: DateTime<Utc>,
    pub endpoint_id: WebhookEndpointID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookEndpointEvent {
    pub fn typename(&self) -> &'static str {
        match self {
            WebhookEndpointEvent::Created(_) => "WebhookEndpointEventCreated",
            WebhookEndpointEvent::Modified(_) => "WebhookEndpointEventModified",
            WebhookEndpointEvent::Paused(_) => "WebhookEndpointEventPaused",
            WebhookEndpointEvent::Resumed(_) => "WebhookEndpointEventResumed",
            WebhookEndpointEvent::SecretRotated(_) => "WebhookEndpointEventSecretRotated",
            WebhookEndpointEvent::Removed(_) => "WebhookEndpointEventRemoved",
        }
    }

    pub fn endpoint_id(&self) -> WebhookEndpointID {
        match self {
            WebhookEndpointEvent::Created(e) => e.endpoint_id,
            WebhookEndpointEvent::Modified(e) => e.endpoint_id,
            WebhookEndpointEvent::Paused(e) => e.endpoint_id,
            WebhookEndpointEvent::Resumed(e) => e.endpoint_id,
            WebhookEndpointEvent::SecretRotated(e) => e.endpoint_id,
            WebhookEndpointEvent::Removed(e) => e.endpoint_id,
        }
    }

    pub fn event_time(&self) -> DateTime<Utc> {
        match self {
            WebhookEndpointEvent::Created(e) => e.event_time,
            WebhookEndpointEvent::Modified(e) => e.event_time,
            WebhookEndpointEvent::Paused(e) => e.event_time,
            WebhookEndpointEvent::Resumed(e) => e.event_time,
            WebhookEndpointEvent::SecretRotated(e) => e.event_time,
            WebhookEndpointEvent::Removed(e) => e.event_time,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<WebhookEndpointEventCreated> for WebhookEndpointEvent {
    fn from(e: WebhookEndpointEventCreated) -> Self {
        Self::Created(e)
    }
}

impl From<WebhookEndpointEventModified> for WebhookEndpointEvent {
    fn from(e: WebhookEndpointEventModified) -> Self {
        Self::Modified(e)
    }
}

impl From<WebhookEndpointEventPaused> for WebhookEndpointEvent {
    fn from(e: WebhookEndpointEventPaused) -> Self {
        Self::Paused(e)
    }
}

impl From<WebhookEndpointEventResumed> for WebhookEndpointEvent {
    fn from(e: WebhookEndpointEventResumed) -> Self {
        Self::Resumed(e)
    }
}

impl From<WebhookEndpointEventSecretRotated> for WebhookEndpointEvent {
    fn from(e: WebhookEndpointEventSecretRotated) -> Self {
        Self::SecretRotated(e)
    }
}

impl From<WebhookEndpointEventRemoved> for WebhookEndpointEvent {
    fn from(e: WebhookEndpointEventRemoved) -> Self {
        Self::Removed(e)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
