// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use dill::{component, interface};
use folio_webhooks::{WebhookEndpointSecret, WebhookSignature, WebhookSigner};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component]
#[interface(dyn WebhookSigner)]
pub struct WebhookSignerImpl {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl WebhookSigner for WebhookSignerImpl {
    fn generate_signature(
        &self,
        secret: &WebhookEndpointSecret,
        timestamp: DateTime<Utc>,
        payload: &[u8],
    ) -> WebhookSignature {
        // Signed message is `{unix_timestamp}.{payload}`, covering both the
        // document and the moment it was signed
        let mut message = timestamp.timestamp().to_string().into_bytes();
        message.push(b'.');
        message.extend_from_slice(payload);

        let key = ring::hmac::Key::new(
            ring::hmac::HMAC_SHA256,
            secret.exposed_value().as_bytes(),
        );
        let tag = ring::hmac::sign(&key, &message);

        WebhookSignature::new(hex::encode(tag.as_ref()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
