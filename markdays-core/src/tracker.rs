//! Day tracker: the in-memory marked-day set for one session, kept in sync
//! with a store.
//!
//! Every state change is published on a `watch` channel. Toggles publish the
//! new set before it is persisted and publish the previous set again if
//! persisting fails. Failures never escape the tracker; they end up in
//! [`DayTrackerState::error`].
//!
//! Loads and toggles are serialized per tracker, so the set a toggle rolls
//! back to is always the last committed one. A toggle issued before any load
//! has succeeded loads first, and is dropped if that load fails.

use chrono::NaiveDate;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error};

use crate::constants::{DATA_FILE_NAME, MARKED_DAYS_STORAGE_KEY};
use crate::day_key::DayKey;
use crate::error::StoreResult;
use crate::marked_days::MarkedDaySet;
use crate::store::{Store, StoreBackend};

/// Published state of a [`DayTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTrackerState {
    pub marked_days: MarkedDaySet,
    /// True while a load is in flight, including the one a first toggle runs.
    pub is_loading: bool,
    /// Description of the last failure, cleared by the next success.
    pub error: Option<String>,
}

impl Default for DayTrackerState {
    fn default() -> Self {
        DayTrackerState {
            marked_days: MarkedDaySet::new(),
            is_loading: true,
            error: None,
        }
    }
}

pub struct DayTracker<B> {
    backend: B,
    store_name: String,
    state: watch::Sender<DayTrackerState>,
    /// Serializes mutations; holds whether a load has succeeded yet.
    write_lock: Mutex<bool>,
}

impl<B: StoreBackend> DayTracker<B> {
    pub fn new(backend: B) -> Self {
        Self::with_store_name(backend, DATA_FILE_NAME)
    }

    pub fn with_store_name(backend: B, store_name: impl Into<String>) -> Self {
        let (state, _) = watch::channel(DayTrackerState::default());
        DayTracker {
            backend,
            store_name: store_name.into(),
            state,
            write_lock: Mutex::new(false),
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Receive every published state, including optimistic ones.
    pub fn subscribe(&self) -> watch::Receiver<DayTrackerState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DayTrackerState {
        self.state.borrow().clone()
    }

    pub fn marked_days(&self) -> MarkedDaySet {
        self.state.borrow().marked_days.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_marked(&self, date: NaiveDate) -> bool {
        self.is_key_marked(&DayKey::from_date(date))
    }

    pub fn is_key_marked(&self, key: &DayKey) -> bool {
        self.state.borrow().marked_days.is_marked(key)
    }

    /// Load the marked days from the store.
    ///
    /// On failure the previous set is kept and the error is recorded.
    /// Loading always ends, successful or not.
    pub async fn load(&self) {
        let mut loaded = self.write_lock.lock().await;
        self.load_locked(&mut loaded).await;
    }

    pub async fn reload(&self) {
        self.load().await
    }

    pub async fn toggle(&self, date: NaiveDate) {
        self.toggle_key(DayKey::from_date(date)).await
    }

    /// Toggle `key`, publishing the new set right away and rolling back to
    /// the previous set if it can't be persisted.
    pub async fn toggle_key(&self, key: DayKey) {
        let mut loaded = self.write_lock.lock().await;

        if !*loaded {
            self.load_locked(&mut loaded).await;
            if !*loaded {
                // Don't write a set we never read over the stored one
                return;
            }
        }

        let previous = self.marked_days();
        let candidate = previous.toggle(&key);
        let sequence = candidate.to_sequence();

        self.state.send_modify(|s| s.marked_days = candidate);

        match self.persist(sequence).await {
            Ok(()) => {
                debug!(day = %key, "saved marked days");
                self.state.send_modify(|s| s.error = None);
            }
            Err(err) => {
                error!(day = %key, error = %err, "Error saving marked days");
                self.state.send_modify(|s| {
                    s.marked_days = previous;
                    s.error = Some(err.to_string());
                });
            }
        }
    }

    async fn load_locked(&self, loaded: &mut bool) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.fetch().await {
            Ok(marked_days) => {
                debug!(count = marked_days.len(), "loaded marked days");
                *loaded = true;
                self.state.send_modify(|s| {
                    s.marked_days = marked_days;
                    s.is_loading = false;
                });
            }
            Err(err) => {
                error!(error = %err, "Error loading marked days");
                self.state.send_modify(|s| {
                    s.error = Some(err.to_string());
                    s.is_loading = false;
                });
            }
        }
    }

    async fn fetch(&self) -> StoreResult<MarkedDaySet> {
        let store = self.backend.open(&self.store_name).await?;
        let saved = store.get(MARKED_DAYS_STORAGE_KEY).await?;
        Ok(MarkedDaySet::from_sequence(saved))
    }

    async fn persist(&self, sequence: Vec<String>) -> StoreResult<()> {
        let mut store = self.backend.open(&self.store_name).await?;
        store.set(MARKED_DAYS_STORAGE_KEY, sequence).await?;
        store.save().await
    }
}
