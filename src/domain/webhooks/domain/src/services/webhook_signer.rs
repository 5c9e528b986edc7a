// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::WebhookEndpointSecret;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Computes the signature a receiver can recompute to authenticate a delivery.
///
/// The signed content is `"{unix_timestamp}.{payload}"`, where the timestamp
/// is the same value sent in the `X-Webhook-Timestamp` header. Binding the
/// timestamp into the digest lets receivers reject replayed requests.
pub trait WebhookSigner: Send + Sync {
    fn generate_signature(
        &self,
        secret: &WebhookEndpointSecret,
        timestamp: DateTime<Utc>,
        payload: &[u8],
    ) -> WebhookSignature;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Lowercase hex encoding of an HMAC-SHA256 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSignature(String);

impl WebhookSignature {
    pub fn new(hex_digest: String) -> Self {
        Self(hex_digest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for WebhookSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
