//! Terminal rendering for marked days.
//!
//! The core only knows whether a day is marked; combining that with whether
//! the day is today happens here.

use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// How a day is presented, from "is today" and "is marked".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPresentation {
    Unmarked,
    Marked,
    Today,
    TodayMarked,
}

impl DayPresentation {
    pub const ALL: [DayPresentation; 4] = [
        DayPresentation::Unmarked,
        DayPresentation::Marked,
        DayPresentation::Today,
        DayPresentation::TodayMarked,
    ];

    pub fn of(is_today: bool, is_marked: bool) -> Self {
        match (is_today, is_marked) {
            (false, false) => DayPresentation::Unmarked,
            (false, true) => DayPresentation::Marked,
            (true, false) => DayPresentation::Today,
            (true, true) => DayPresentation::TodayMarked,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            DayPresentation::Unmarked => "unmarked-day",
            DayPresentation::Marked => "marked-day",
            DayPresentation::Today => "today-day",
            DayPresentation::TodayMarked => "today-marked-day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayPresentation::Unmarked => "Unmarked day",
            DayPresentation::Marked => "Marked day",
            DayPresentation::Today => "Today",
            DayPresentation::TodayMarked => "Today (marked)",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            DayPresentation::Unmarked | DayPresentation::Today => "○",
            DayPresentation::Marked | DayPresentation::TodayMarked => "●",
        }
    }

    fn colorize(&self, text: &str) -> String {
        match self {
            DayPresentation::Unmarked => text.dimmed().to_string(),
            DayPresentation::Marked => text.green().to_string(),
            DayPresentation::Today => text.blue().bold().to_string(),
            DayPresentation::TodayMarked => text.green().bold().to_string(),
        }
    }
}

impl Render for DayPresentation {
    fn render(&self) -> String {
        format!("{} {}", self.colorize(self.symbol()), self.label())
    }
}

/// A single day line, e.g. `● 2024-01-02 Tue Jan 02`.
pub struct DayLine {
    pub date: NaiveDate,
    pub presentation: DayPresentation,
}

impl Render for DayLine {
    fn render(&self) -> String {
        let text = format!("{} {}", self.date.format("%Y-%m-%d"), self.date.format("%a %b %d"));
        format!(
            "{} {}",
            self.presentation.colorize(self.presentation.symbol()),
            self.presentation.colorize(&text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_from_flags() {
        assert_eq!(DayPresentation::of(false, false), DayPresentation::Unmarked);
        assert_eq!(DayPresentation::of(false, true), DayPresentation::Marked);
        assert_eq!(DayPresentation::of(true, false), DayPresentation::Today);
        assert_eq!(DayPresentation::of(true, true), DayPresentation::TodayMarked);
    }

    #[test]
    fn test_class_names() {
        let names: Vec<_> = DayPresentation::ALL.iter().map(|p| p.class_name()).collect();
        assert_eq!(names, vec!["unmarked-day", "marked-day", "today-day", "today-marked-day"]);
    }

    #[test]
    fn test_render_includes_label() {
        for presentation in DayPresentation::ALL {
            assert!(presentation.render().contains(presentation.label()));
        }
    }

    #[test]
    fn test_day_line_shows_iso_date() {
        let line = DayLine {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            presentation: DayPresentation::Marked,
        };
        let rendered = line.render();
        assert!(rendered.contains("2024-01-02"));
        assert!(rendered.contains("Tue Jan 02"));
    }
}
