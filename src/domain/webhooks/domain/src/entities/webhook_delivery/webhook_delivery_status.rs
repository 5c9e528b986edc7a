// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookDeliveryStatus {
    /// Created, first attempt has not finished yet
    Pending,
    /// Receiver acknowledged with a 2xx response (terminal)
    Sent,
    /// Last attempt failed, another one is due at `next_attempt_at`
    Retrying,
    /// Attempts are exhausted, or the delivery was aborted (terminal)
    Failed,
}

impl WebhookDeliveryStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            WebhookDeliveryStatus::Sent | WebhookDeliveryStatus::Failed
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
