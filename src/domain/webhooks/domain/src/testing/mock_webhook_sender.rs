// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{WebhookResponse, WebhookSendError, WebhookSender};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub WebhookSender {}

    #[async_trait::async_trait]
    impl WebhookSender for WebhookSender {
        async fn send_webhook(
            &self,
            target_url: url::Url,
            payload: bytes::Bytes,
            headers: http::HeaderMap,
            timeout: std::time::Duration,
        ) -> Result<WebhookResponse, WebhookSendError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
