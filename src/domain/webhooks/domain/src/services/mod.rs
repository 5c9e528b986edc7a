// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod webhook_delivery_agent;
mod webhook_delivery_query_service;
mod webhook_delivery_queue;
mod webhook_delivery_worker;
mod webhook_dispatcher;
mod webhook_endpoint_query_service;
mod webhook_health_aggregator;
mod webhook_secret_generator;
mod webhook_sender;
mod webhook_signer;

pub use webhook_delivery_agent::*;
pub use webhook_delivery_query_service::*;
pub use webhook_delivery_queue::*;
pub use webhook_delivery_worker::*;
pub use webhook_dispatcher::*;
pub use webhook_endpoint_query_service::*;
pub use webhook_health_aggregator::*;
pub use webhook_secret_generator::*;
pub use webhook_sender::*;
pub use webhook_signer::*;
