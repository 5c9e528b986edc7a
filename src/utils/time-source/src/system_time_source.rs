// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Abstracts the system clock so that scheduling logic can be driven by a
/// deterministic time in tests. Production code must never call `Utc::now()`
/// directly.
#[async_trait::async_trait]
pub trait SystemTimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: chrono::Duration);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component(pub)]
#[dill::interface(dyn SystemTimeSource)]
pub struct SystemTimeSourceDefault;

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceDefault {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: chrono::Duration) {
        tokio::time::sleep(duration.to_std().unwrap_or_default()).await;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A settable clock for tests. When no time has been set it falls through to
/// the wall clock. `sleep` yields without waiting so that agent loops driven
/// by the stub stay fast.
#[derive(Clone)]
pub struct SystemTimeSourceStub {
    t: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl SystemTimeSourceStub {
    pub fn new() -> Self {
        Self {
            t: Arc::new(Mutex::new(None)),
        }
    }

    pub fn new_set(t: DateTime<Utc>) -> Self {
        Self {
            t: Arc::new(Mutex::new(Some(t))),
        }
    }

    pub fn set(&self, t: DateTime<Utc>) {
        *self.t.lock().unwrap() = Some(t);
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut guard = self.t.lock().unwrap();
        let current = guard.unwrap_or_else(Utc::now);
        *guard = Some(current + by);
    }

    pub fn unset(&self) {
        *self.t.lock().unwrap() = None;
    }
}

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceStub {
    fn now(&self) -> DateTime<Utc> {
        match *self.t.lock().unwrap() {
            None => Utc::now(),
            Some(t) => t,
        }
    }

    async fn sleep(&self, _duration: chrono::Duration) {
        tokio::task::yield_now().await;
    }
}
