//! Session store: in-memory sessions with per-key mutual exclusion.
//!
//! The outer map lock is only held to find or insert a slot. Each session
//! sits behind its own mutex, so a whole request can run as one transaction
//! against its key while requests for other keys proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::{info, warn};

use super::model::{IntelCategory, IntelligenceLog, Session, SessionMemory, Turn};
use crate::error::SessionError;
use crate::replies::ReplyCategory;

struct SessionSlot {
    session: Arc<Mutex<Session>>,
    /// Logical clock value of the most recent access, for LRU eviction.
    touched: AtomicU64,
}

/// Owns every live session.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionSlot>>,
    clock: AtomicU64,
    capacity: Option<usize>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Unbounded store: sessions live for the lifetime of the process.
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// Store that keeps at most `capacity` sessions, evicting the least
    /// recently used idle one when a new key arrives at the limit. Sessions
    /// held by an in-flight request are never evicted; if all of them are
    /// busy the store temporarily grows past `capacity`.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
            capacity,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.sessions.read().await.contains_key(key)
    }

    /// Lock the session for `key`, creating it first if it does not exist.
    ///
    /// The returned guard holds the per-key mutex until dropped.
    pub async fn lock(&self, key: &str) -> SessionGuard {
        let session = self.slot(key).await;
        let mut guard = session.lock_owned().await;
        guard.last_seen = Utc::now();
        SessionGuard { inner: guard }
    }

    /// Clone of the session for `key`, creating an empty one if absent.
    pub async fn get_or_create(&self, key: &str) -> Session {
        self.lock(key).await.session().clone()
    }

    pub async fn append_turn(&self, key: &str, turn: Turn) {
        self.lock(key).await.append_turn(turn);
    }

    pub async fn merge_intelligence(&self, key: &str, category: IntelCategory, values: Vec<String>) {
        self.lock(key).await.merge_intelligence(category, values);
    }

    pub async fn next_rotation_index(
        &self,
        key: &str,
        category: ReplyCategory,
        bank_size: usize,
    ) -> Result<usize, SessionError> {
        self.lock(key).await.next_rotation_index(category, bank_size)
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    async fn slot(&self, key: &str) -> Arc<Mutex<Session>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(slot) = sessions.get(key) {
                slot.touched.store(self.tick(), Ordering::Relaxed);
                return Arc::clone(&slot.session);
            }
        }

        let mut sessions = self.sessions.write().await;
        // Another task may have created it between the two locks.
        if let Some(slot) = sessions.get(key) {
            slot.touched.store(self.tick(), Ordering::Relaxed);
            return Arc::clone(&slot.session);
        }

        if let Some(capacity) = self.capacity {
            while sessions.len() >= capacity {
                let Some(oldest) = least_recently_used_idle(&sessions) else {
                    warn!(
                        capacity,
                        live_sessions = sessions.len(),
                        "Session store at capacity with every session in use, admitting over capacity"
                    );
                    break;
                };
                if let Some(slot) = sessions.remove(&oldest) {
                    log_eviction(&oldest, &slot, capacity);
                }
            }
        }

        let session = Arc::new(Mutex::new(Session::new(key)));
        sessions.insert(
            key.to_string(),
            SessionSlot {
                session: Arc::clone(&session),
                touched: AtomicU64::new(self.tick()),
            },
        );
        info!(session_id = %key, live_sessions = sessions.len(), "Session created");
        session
    }
}

/// Oldest slot nobody else holds a handle to.
///
/// A held guard, or a task between `slot()` and `lock_owned()`, keeps an extra
/// `Arc` alive. Such a slot must stay mapped so the next request for its key
/// queues on the same mutex.
fn least_recently_used_idle(sessions: &HashMap<String, SessionSlot>) -> Option<String> {
    sessions
        .iter()
        .filter(|(_, slot)| Arc::strong_count(&slot.session) == 1)
        .min_by_key(|(_, slot)| slot.touched.load(Ordering::Relaxed))
        .map(|(key, _)| key.clone())
}

fn log_eviction(key: &str, slot: &SessionSlot, capacity: usize) {
    match slot.session.try_lock() {
        Ok(session) => {
            let now = Utc::now();
            warn!(
                session_id = %key,
                capacity,
                turns = session.history.len(),
                idle_secs = (now - session.last_seen).num_seconds(),
                age_secs = (now - session.created_at).num_seconds(),
                "Session store at capacity, evicted least recently used session"
            );
        }
        Err(_) => warn!(
            session_id = %key,
            capacity,
            "Session store at capacity, evicted least recently used session"
        ),
    }
}

/// Exclusive handle on one session for the duration of a request.
pub struct SessionGuard {
    inner: OwnedMutexGuard<Session>,
}

impl SessionGuard {
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn session(&self) -> &Session {
        &self.inner
    }

    pub fn append_turn(&mut self, turn: Turn) {
        self.inner.history.push(turn);
    }

    pub fn merge_intelligence<I>(&mut self, category: IntelCategory, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.inner.intelligence.append(category, values);
    }

    /// Merge every non-empty category of an extraction batch.
    pub fn merge_batch(&mut self, batch: &IntelligenceLog) {
        self.inner.intelligence.extend_from(batch);
    }

    /// Return `cursor % bank_size` for `category`, then advance the cursor.
    pub fn next_rotation_index(
        &mut self,
        category: ReplyCategory,
        bank_size: usize,
    ) -> Result<usize, SessionError> {
        if bank_size == 0 {
            return Err(SessionError::EmptyReplyBank { category });
        }
        let cursor = self.inner.rotation_cursors.entry(category).or_insert(0);
        let index = (*cursor % bank_size as u64) as usize;
        *cursor = cursor.wrapping_add(1);
        Ok(index)
    }

    pub fn snapshot(&self) -> SessionMemory {
        self.inner.memory()
    }
}
