pub mod config;
pub mod legend;
pub mod list;
pub mod status;
pub mod toggle;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use markdays_core::DayTracker;
use markdays_core::config::MarkdaysConfig;
use markdays_core::constants::DAY_KEY_FORMAT;
use markdays_core::store::JsonFileBackend;
use tracing::debug;

/// Build a tracker for the configured store and load it.
///
/// Fails if the marked days can't be read, so nothing gets written over a
/// store we couldn't load.
pub async fn load_tracker(config: &MarkdaysConfig) -> Result<DayTracker<JsonFileBackend>> {
    let backend = JsonFileBackend::new(config.data_path());
    let tracker = DayTracker::with_store_name(backend, config.store_name.as_str());

    debug!(store = %config.store_path().display(), "loading marked days");
    tracker.load().await;

    if let Some(error) = tracker.error() {
        anyhow::bail!(
            "Could not load marked days from {}: {}",
            config.store_path().display(),
            error
        );
    }

    Ok(tracker)
}

/// Parse a day argument: "today", "yesterday", "tomorrow" or YYYY-MM-DD.
pub fn parse_day(arg: &str, today: NaiveDate) -> Result<NaiveDate> {
    match arg.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        "tomorrow" => Ok(today + Duration::days(1)),
        other => NaiveDate::parse_from_str(other, DAY_KEY_FORMAT).with_context(|| {
            format!("Invalid day '{}'. Expected YYYY-MM-DD, today, yesterday or tomorrow", arg)
        }),
    }
}
