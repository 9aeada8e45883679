use owo_colors::OwoColorize;

use crate::render::{DayPresentation, Render};

pub fn run() {
    println!("{}", "Legend".bold());
    for presentation in DayPresentation::ALL {
        println!("  {}", presentation.render());
    }
}
