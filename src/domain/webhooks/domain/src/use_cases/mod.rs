// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod create_webhook_endpoint_use_case;
mod ping_webhook_endpoint_use_case;
mod regenerate_webhook_endpoint_secret_use_case;
mod remove_webhook_endpoint_use_case;
mod retry_failed_webhook_deliveries_use_case;
mod toggle_webhook_endpoint_use_case;
mod update_webhook_endpoint_use_case;

pub use create_webhook_endpoint_use_case::*;
pub use ping_webhook_endpoint_use_case::*;
pub use regenerate_webhook_endpoint_secret_use_case::*;
pub use remove_webhook_endpoint_use_case::*;
pub use retry_failed_webhook_deliveries_use_case::*;
pub use toggle_webhook_endpoint_use_case::*;
pub use update_webhook_endpoint_use_case::*;
