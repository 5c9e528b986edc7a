// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use folio_webhooks::{WebhookEndpointSecret, WebhookSigner};
use folio_webhooks_services::WebhookSignerImpl;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn signing_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-05-13T22:56:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn test_secret() -> WebhookEndpointSecret {
    WebhookEndpointSecret::try_new("whsec_test_secret").unwrap()
}

const TEST_PAYLOAD: &[u8] = br#"{"invoice_id":"INV-0042","status":"paid"}"#;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_signature_matches_known_vector() {
    let signer = WebhookSignerImpl {};

    let signature = signer.generate_signature(&test_secret(), signing_time(), TEST_PAYLOAD);

    // The signed message is "1747176960." followed by the payload bytes.
    // Expected value computed with an independent HMAC-SHA256 implementation.
    assert_eq!(
        signature.as_str(),
        "c221dbd6b063ec3cd637aefb4b0e4449252ab78ecbee103317b2b22c1021ccda"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_signing_is_deterministic() {
    let signer = WebhookSignerImpl {};

    let first = signer.generate_signature(&test_secret(), signing_time(), TEST_PAYLOAD);
    let second = signer.generate_signature(&test_secret(), signing_time(), TEST_PAYLOAD);

    assert_eq!(first, second);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_signature_depends_on_secret() {
    let signer = WebhookSignerImpl {};
    let other_secret = WebhookEndpointSecret::try_new("whsec_other_secret").unwrap();

    let signature = signer.generate_signature(&test_secret(), signing_time(), TEST_PAYLOAD);
    let other_signature = signer.generate_signature(&other_secret, signing_time(), TEST_PAYLOAD);

    assert_ne!(signature, other_signature);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_signature_depends_on_timestamp() {
    let signer = WebhookSignerImpl {};
    let one_second_later = signing_time() + chrono::Duration::seconds(1);

    let signature = signer.generate_signature(&test_secret(), signing_time(), TEST_PAYLOAD);
    let later_signature = signer.generate_signature(&test_secret(), one_second_later, TEST_PAYLOAD);

    // Receivers recompute the digest from the timestamp header, so the
    // timestamp must be bound into the signature
    assert_ne!(signature, later_signature);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
