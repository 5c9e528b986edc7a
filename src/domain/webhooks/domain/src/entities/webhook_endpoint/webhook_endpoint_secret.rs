// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shared HMAC signing secret of an endpoint.
///
/// The raw value is shown to the operator exactly once, at creation or
/// rotation time. Everywhere else it stays wrapped so that debug output and
/// traces never leak it.
#[derive(Clone)]
pub struct WebhookEndpointSecret {
    value: SecretString,
}

impl WebhookEndpointSecret {
    pub fn try_new(value: impl Into<String>) -> Result<Self, WebhookEndpointSecretEmptyError> {
        let value: String = value.into();
        if value.is_empty() {
            return Err(WebhookEndpointSecretEmptyError {});
        }
        Ok(Self {
            value: SecretString::from(value),
        })
    }

    pub fn exposed_value(&self) -> &str {
        self.value.expose_secret()
    }
}

impl std::fmt::Debug for WebhookEndpointSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WebhookEndpointSecret(***)")
    }
}

impl PartialEq for WebhookEndpointSecret {
    fn eq(&self, other: &Self) -> bool {
        self.exposed_value() == other.exposed_value()
    }
}

impl Eq for WebhookEndpointSecret {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Event records persist the raw value, so serialization has to expose it

impl serde::Serialize for WebhookEndpointSecret {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.exposed_value())
    }
}

impl<'de> serde::Deserialize<'de> for WebhookEndpointSecret {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::try_new(value).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Webhook endpoint secret cannot be empty")]
pub struct WebhookEndpointSecretEmptyError {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
