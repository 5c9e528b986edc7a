// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::WebhookEventType;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The closed set of event types the platform emits.
///
/// `test.ping` is reserved for operator-triggered test deliveries and cannot
/// be subscribed to.
pub struct WebhookEventTypeCatalog {}

impl WebhookEventTypeCatalog {
    pub const INVOICE_PAID: &'static str = "invoice.paid";
    pub const INVOICE_VOIDED: &'static str = "invoice.voided";
    pub const QUOTATION_ACCEPTED: &'static str = "quotation.accepted";
    pub const QUOTATION_DECLINED: &'static str = "quotation.declined";
    pub const LEAD_STATUS_CHANGED: &'static str = "lead.status_changed";
    pub const TEST_PING: &'static str = "test.ping";

    pub fn invoice_paid() -> WebhookEventType {
        WebhookEventType::try_new(Self::INVOICE_PAID).unwrap()
    }

    pub fn invoice_voided() -> WebhookEventType {
        WebhookEventType::try_new(Self::INVOICE_VOIDED).unwrap()
    }

    pub fn quotation_accepted() -> WebhookEventType {
        WebhookEventType::try_new(Self::QUOTATION_ACCEPTED).unwrap()
    }

    pub fn quotation_declined() -> WebhookEventType {
        WebhookEventType::try_new(Self::QUOTATION_DECLINED).unwrap()
    }

    pub fn lead_status_changed() -> WebhookEventType {
        WebhookEventType::try_new(Self::LEAD_STATUS_CHANGED).unwrap()
    }

    pub fn test_ping() -> WebhookEventType {
        WebhookEventType::try_new(Self::TEST_PING).unwrap()
    }

    pub fn all_subscribable() -> Vec<WebhookEventType> {
        vec![
            Self::invoice_paid(),
            Self::invoice_voided(),
            Self::quotation_accepted(),
            Self::quotation_declined(),
            Self::lead_status_changed(),
        ]
    }

    pub fn is_valid_type(event_type: &WebhookEventType) -> bool {
        Self::is_subscribable(event_type) || event_type.as_ref() == Self::TEST_PING
    }

    pub fn is_subscribable(event_type: &WebhookEventType) -> bool {
        matches!(
            event_type.as_ref(),
            Self::INVOICE_PAID
                | Self::INVOICE_VOIDED
                | Self::QUOTATION_ACCEPTED
                | Self::QUOTATION_DECLINED
                | Self::LEAD_STATUS_CHANGED
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
