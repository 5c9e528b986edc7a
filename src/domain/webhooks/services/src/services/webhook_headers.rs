// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const HEADER_WEBHOOK_SIGNATURE: &str = "x-webhook-signature";
pub const HEADER_WEBHOOK_TIMESTAMP: &str = "x-webhook-timestamp";
pub const HEADER_WEBHOOK_EVENT: &str = "x-webhook-event";
pub const HEADER_WEBHOOK_DELIVERY_ID: &str = "x-webhook-delivery-id";
pub const HEADER_WEBHOOK_DELIVERY_ATTEMPT: &str = "x-webhook-delivery-attempt";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const FOLIO_WEBHOOK_USER_AGENT: &str = "Folio-Webhook/1.0";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
