use anyhow::Result;
use chrono::NaiveDate;
use markdays_core::DayKey;
use markdays_core::config::MarkdaysConfig;
use owo_colors::OwoColorize;

use super::{load_tracker, parse_day};
use crate::render::{DayLine, DayPresentation, Render};

pub async fn run(config: &MarkdaysConfig, day: &str) -> Result<()> {
    let today = config.today()?;
    let date = parse_day(day, today)?;
    let tracker = load_tracker(config).await?;

    tracker.toggle(date).await;

    if let Some(error) = tracker.error() {
        return Err(save_error(date, &error));
    }

    let is_marked = tracker.is_marked(date);
    let line = DayLine {
        date,
        presentation: DayPresentation::of(date == today, is_marked),
    };
    let verb = if is_marked { "Marked" } else { "Unmarked" };
    println!("{} {}", verb.bold(), line.render());

    Ok(())
}

/// The command's error for a toggle that couldn't be persisted. It carries
/// the store's description, so nothing else needs to print it.
fn save_error(date: NaiveDate, error: &str) -> anyhow::Error {
    anyhow::anyhow!("Could not save {}: {}", DayKey::from_date(date), error)
}
