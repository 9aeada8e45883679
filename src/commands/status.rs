use anyhow::Result;
use markdays_core::config::MarkdaysConfig;

use super::{load_tracker, parse_day};
use crate::render::{DayLine, DayPresentation, Render};

pub async fn run(config: &MarkdaysConfig, day: Option<&str>) -> Result<()> {
    let today = config.today()?;
    let date = match day {
        Some(day) => parse_day(day, today)?,
        None => today,
    };
    let tracker = load_tracker(config).await?;

    let presentation = DayPresentation::of(date == today, tracker.is_marked(date));

    println!("{}", DayLine { date, presentation }.render());
    println!("  {} ({})", presentation.label(), presentation.class_name());

    Ok(())
}
