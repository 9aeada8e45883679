//! Core types for markdays.
//!
//! - `MarkedDaySet`, a value-level set of marked days with a pure toggle
//! - `store`, the key-value persistence seam and its JSON file backend
//! - `DayTracker`, which keeps the set in sync with a store and rolls back
//!   toggles that fail to persist

pub mod config;
pub mod constants;
pub mod date_range;
pub mod day_key;
pub mod error;
pub mod marked_days;
pub mod store;
pub mod tracker;

pub use day_key::DayKey;
pub use error::{MarkdaysError, MarkdaysResult, StoreError, StoreResult};
pub use marked_days::MarkedDaySet;
pub use tracker::{DayTracker, DayTrackerState};
