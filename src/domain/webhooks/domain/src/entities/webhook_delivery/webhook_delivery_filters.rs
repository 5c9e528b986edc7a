// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Narrows delivery history queries. All criteria are conjunctive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookDeliveryFilters {
    pub by_status: Option<WebhookDeliveryStatus>,
    pub by_event_type: Option<WebhookEventType>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl WebhookDeliveryFilters {
    pub fn matches(&self, delivery: &WebhookDeliveryState) -> bool {
        if let Some(status) = self.by_status
            && delivery.status() != status
        {
            return false;
        }
        if let Some(event_type) = &self.by_event_type
            && delivery.event_type != *event_type
        {
            return false;
        }
        if let Some(after) = self.created_after
            && delivery.timing.created_at <= after
        {
            return false;
        }
        if let Some(before) = self.created_before
            && delivery.timing.created_at >= before
        {
            return false;
        }
        true
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct WebhookDeliveryListing {
    /// Page of deliveries, newest first
    pub deliveries: Vec<WebhookDeliveryState>,
    /// Total matches before pagination
    pub total_count: usize,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
