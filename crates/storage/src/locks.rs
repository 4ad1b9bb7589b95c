//! Per-video locks for read-modify-write sequences.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use vidtrack_core::VideoKey;

/// Registry of one async mutex per video key.
///
/// Two requests patching the same video must not interleave their
/// load→patch→save steps. Holding the guard returned by [`KeyLocks::lock`]
/// for the whole sequence serialises them; different keys never contend.
#[derive(Default)]
pub struct KeyLocks {
    locks: Mutex<HashMap<VideoKey, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `key`.
    pub async fn lock(&self, key: &VideoKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Drop entries nobody holds or waits on.
            locks.retain(|_, l| Arc::strong_count(l) > 1);
            locks.entry(key.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of keys currently locked or waited on.
    pub async fn active(&self) -> usize {
        self.locks
            .lock()
            .await
            .values()
            .filter(|l| Arc::strong_count(l) > 1)
            .count()
    }
}
