// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod delivery_channel;
mod retry_policy;
mod webhook_delivery_attempt;
mod webhook_delivery_event;
mod webhook_delivery_filters;
mod webhook_delivery_id;
mod webhook_delivery_state;
mod webhook_delivery_status;

pub use delivery_channel::*;
pub use retry_policy::*;
pub use webhook_delivery_attempt::*;
pub use webhook_delivery_event::*;
pub use webhook_delivery_filters::*;
pub use webhook_delivery_id::*;
pub use webhook_delivery_state::*;
pub use webhook_delivery_status::*;
