// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod webhook_endpoint_event;
mod webhook_endpoint_id;
mod webhook_endpoint_name;
mod webhook_endpoint_secret;
mod webhook_endpoint_state;
mod webhook_endpoint_status;

pub use webhook_endpoint_event::*;
pub use webhook_endpoint_id::*;
pub use webhook_endpoint_name::*;
pub use webhook_endpoint_secret::*;
pub use webhook_endpoint_state::*;
pub use webhook_endpoint_status::*;
