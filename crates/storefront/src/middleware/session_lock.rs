//! Per-visitor request serialization.
//!
//! `tower-sessions` loads its own copy of the session record for every
//! request and writes the whole record back when the response is built, so
//! two concurrent POSTs from one visitor would each read the same cart and
//! the later save would drop the earlier change. This layer holds a lock per
//! session id around the entire request, session save included, so one
//! visitor's mutations run one after another. Different visitors never wait
//! on each other.
//!
//! Must sit outside the session layer.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower_sessions::cookie::Cookie;

use super::session::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// One mutex per session id.
#[derive(Debug, Default, Clone)]
pub struct SessionLocks {
    inflight: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl SessionLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive use of session `id`.
    ///
    /// Entries nobody holds or waits on are pruned on the way in.
    pub async fn acquire(&self, id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inflight = self.inflight.lock().await;
            inflight.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(
                inflight
                    .entry(id.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }

    /// Session ids currently tracked, idle ones included.
    pub async fn tracked(&self) -> usize {
        self.inflight.lock().await.len()
    }
}

/// Session id from the request's `cf_session` cookie.
fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

/// Serialize unsafe requests (POST and friends) per session.
///
/// Reads pass straight through. Requests without a session cookie have no
/// stored state to race on and also pass through.
pub async fn session_lock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method().is_safe() {
        return next.run(request).await;
    }
    let Some(id) = session_id(request.headers()) else {
        return next.run(request).await;
    };

    let _guard = state.session_locks().acquire(&id).await;
    next.run(request).await
}
