// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod webhook_delivery_agent_impl;
mod webhook_delivery_query_service_impl;
mod webhook_delivery_queue_impl;
mod webhook_delivery_worker_impl;
mod webhook_dispatcher_impl;
mod webhook_endpoint_query_service_impl;
mod webhook_headers;
mod webhook_health_aggregator_impl;
mod webhook_secret_generator_impl;
mod webhook_sender_impl;
mod webhook_signer_impl;

pub use webhook_delivery_agent_impl::*;
pub use webhook_delivery_query_service_impl::*;
pub use webhook_delivery_queue_impl::*;
pub use webhook_delivery_worker_impl::*;
pub use webhook_dispatcher_impl::*;
pub use webhook_endpoint_query_service_impl::*;
pub use webhook_headers::*;
pub use webhook_health_aggregator_impl::*;
pub use webhook_secret_generator_impl::*;
pub use webhook_sender_impl::*;
pub use webhook_signer_impl::*;
