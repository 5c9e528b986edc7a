// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use folio_webhooks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const MIN_WEBHOOK_TIMEOUT_SECONDS: u32 = 1;
const MAX_WEBHOOK_TIMEOUT_SECONDS: u32 = 60;

const MIN_WEBHOOK_MAX_RETRIES: u32 = 1;
const MAX_WEBHOOK_MAX_RETRIES: u32 = 10;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn validate_webhook_target_url(
    target_url: &url::Url,
) -> Result<(), WebhookInvalidTargetUrlError> {
    if target_url.scheme() != "https" {
        return Err(WebhookInvalidTargetUrlError {
            url: target_url.clone(),
            reason: "only https urls are accepted".to_string(),
        });
    }

    let Some(host) = target_url.host() else {
        return Err(WebhookInvalidTargetUrlError {
            url: target_url.clone(),
            reason: "a host is required".to_string(),
        });
    };

    let is_loopback = match host {
        url::Host::Domain(domain) => domain.eq_ignore_ascii_case("localhost"),
        url::Host::Ipv4(address) => address.is_loopback(),
        url::Host::Ipv6(address) => address.is_loopback(),
    };
    if is_loopback {
        return Err(WebhookInvalidTargetUrlError {
            url: target_url.clone(),
            reason: "loopback addresses are not accepted".to_string(),
        });
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Rejects event types outside the platform catalog, `test.ping` included:
/// pings are triggered explicitly, never subscribed to
pub(crate) fn validate_webhook_event_types(
    event_types: &[WebhookEventType],
) -> Result<(), WebhookUnsupportedEventTypeError> {
    for event_type in event_types {
        if !WebhookEventTypeCatalog::is_subscribable(event_type) {
            return Err(WebhookUnsupportedEventTypeError {
                event_type: event_type.clone(),
            });
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Drops repeated event types, keeping the first occurrence of each
pub(crate) fn deduplicate_event_types(event_types: Vec<WebhookEventType>) -> Vec<WebhookEventType> {
    let mut seen = HashSet::new();
    event_types
        .into_iter()
        .filter(|event_type| seen.insert(event_type.clone()))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn validate_webhook_delivery_config(
    timeout_seconds: u32,
    max_retries: u32,
) -> Result<(), WebhookInvalidDeliveryConfigError> {
    if !(MIN_WEBHOOK_TIMEOUT_SECONDS..=MAX_WEBHOOK_TIMEOUT_SECONDS).contains(&timeout_seconds) {
        return Err(WebhookInvalidDeliveryConfigError {
            reason: format!(
                "timeout_seconds must be between {MIN_WEBHOOK_TIMEOUT_SECONDS} and \
                 {MAX_WEBHOOK_TIMEOUT_SECONDS}, got {timeout_seconds}"
            ),
        });
    }

    if !(MIN_WEBHOOK_MAX_RETRIES..=MAX_WEBHOOK_MAX_RETRIES).contains(&max_retries) {
        return Err(WebhookInvalidDeliveryConfigError {
            reason: format!(
                "max_retries must be between {MIN_WEBHOOK_MAX_RETRIES} and \
                 {MAX_WEBHOOK_MAX_RETRIES}, got {max_retries}"
            ),
        });
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
