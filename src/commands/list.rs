use anyhow::Result;
use markdays_core::config::MarkdaysConfig;
use markdays_core::date_range::DateRange;
use owo_colors::OwoColorize;

use super::load_tracker;
use crate::render::{DayLine, DayPresentation, Render};

pub async fn run(config: &MarkdaysConfig, range: DateRange) -> Result<()> {
    let today = config.today()?;
    let tracker = load_tracker(config).await?;
    let marked_days = tracker.marked_days();

    let days: Vec<_> = marked_days.iter().filter(|key| range.contains_key(key)).collect();

    if days.is_empty() {
        println!("{}", "No marked days".dimmed());
        return Ok(());
    }

    for key in &days {
        match key.to_date() {
            Some(date) => {
                let presentation = DayPresentation::of(date == today, true);
                println!("{}", DayLine { date, presentation }.render());
            }
            // Not an ISO date; show the raw key
            None => println!("{} {}", "●".green(), key.as_str().dimmed()),
        }
    }

    let label = if days.len() == 1 { "day" } else { "days" };
    println!("\n{}", format!("{} marked {}", days.len(), label).dimmed());

    Ok(())
}
