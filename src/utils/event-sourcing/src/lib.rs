// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod aggregate;
mod event_id;
mod event_store;
mod inmem_event_store;
mod projection;

pub use aggregate::*;
pub use event_id::*;
pub use event_store::*;
pub use folio_internal_error::{ErrorIntoInternal, InternalError, ResultIntoInternal};
pub use inmem_event_store::*;
pub use projection::*;
