// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::WebhookEndpointID;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Transport a delivery goes out on.
///
/// The retry state machine is channel-agnostic: it records attempts and
/// outcomes without knowing how the notification is transported. Workers
/// match on the channel to pick the transport at attempt time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryChannel {
    /// Signed HTTP POST to a registered endpoint
    Webhook { endpoint_id: WebhookEndpointID },
}

impl DeliveryChannel {
    pub fn webhook_endpoint_id(&self) -> WebhookEndpointID {
        match self {
            DeliveryChannel::Webhook { endpoint_id } => *endpoint_id,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
