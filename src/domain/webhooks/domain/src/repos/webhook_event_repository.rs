// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use folio_internal_error::InternalError;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Stores captured domain events so that every delivery of the same event
/// serves an identical payload
#[async_trait::async_trait]
pub trait WebhookEventRepository: Send + Sync {
    async fn create_event(&self, event: &WebhookEvent) -> Result<(), CreateWebhookEventError>;

    async fn get_event(
        &self,
        event_id: WebhookEventID,
    ) -> Result<WebhookEvent, GetWebhookEventError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum CreateWebhookEventError {
    #[error(transparent)]
    DuplicateId(#[from] WebhookEventDuplicateIDError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
pub enum GetWebhookEventError {
    #[error(transparent)]
    NotFound(#[from] WebhookEventNotFoundError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
#[error("Webhook event id='{event_id}' already exists")]
pub struct WebhookEventDuplicateIDError {
    pub event_id: WebhookEventID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug)]
#[error("Webhook event id='{event_id}' not found")]
pub struct WebhookEventNotFoundError {
    pub event_id: WebhookEventID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
