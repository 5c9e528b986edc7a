// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod webhook_event;
mod webhook_event_id;
mod webhook_event_type;
mod webhook_event_type_catalog;

pub use webhook_event::*;
pub use webhook_event_id::*;
pub use webhook_event_type::*;
pub use webhook_event_type_catalog::*;
