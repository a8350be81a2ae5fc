//! Ordering of overlapping weather requests
//!
//! Nothing cancels an in-flight fetch, so a slow response for an old location
//! can arrive after a newer one from the same caller. Each fetch takes a token
//! when it starts; a result is stale once its caller has been issued a newer
//! token. Callers identify themselves with a client id. Requests without one
//! have nothing to be ordered against and are never stale.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::Serialize;

/// Upper bound on the number of clients whose latest token is remembered
pub const MAX_TRACKED_CLIENTS: usize = 10_000;

/// Monotonically increasing request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    next: AtomicU64,
    latest: Mutex<HashMap<String, u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token newer than every token issued before and record it as
    /// the latest one for `client`
    pub fn issue(&self, client: Option<&str>) -> RequestToken {
        let token = self.next.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(client) = client {
            let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
            if latest.len() >= MAX_TRACKED_CLIENTS && !latest.contains_key(client) {
                evict_oldest(&mut latest);
            }
            let entry = latest.entry(client.to_string()).or_insert(token);
            *entry = (*entry).max(token);
        }

        RequestToken(token)
    }

    /// True while `client` has not been issued a newer token
    pub fn is_latest(&self, client: Option<&str>, token: RequestToken) -> bool {
        let Some(client) = client else {
            return true;
        };
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        // An evicted client has no newer request on record
        latest.get(client).map_or(true, |&newest| newest == token.0)
    }

    pub fn tracked_clients(&self) -> usize {
        self.latest.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

fn evict_oldest(latest: &mut HashMap<String, u64>) {
    let oldest = latest
        .iter()
        .min_by_key(|(_, &token)| token)
        .map(|(client, _)| client.clone());
    if let Some(client) = oldest {
        latest.remove(&client);
    }
}
