// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod webhook_delivery_event_store;
mod webhook_endpoint_event_store;
mod webhook_endpoint_health_repository;
mod webhook_event_repository;

pub use webhook_delivery_event_store::*;
pub use webhook_endpoint_event_store::*;
pub use webhook_endpoint_health_repository::*;
pub use webhook_event_repository::*;
