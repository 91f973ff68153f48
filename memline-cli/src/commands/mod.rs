pub mod add;
pub mod show;
pub mod tags;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use memline_core::MemlineResult;
use memline_core::timeline::Timeline;
use owo_colors::OwoColorize;

/// Spinner shown while a blocking network call runs.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Build the timeline from a load result, surfacing any failure inline.
///
/// A store failure and a malformed row get the same treatment: a red
/// message and an empty timeline, never an aborted command. Only missing
/// startup configuration is fatal.
pub fn timeline_or_empty(rows: MemlineResult<Vec<Vec<String>>>, skip_rows: usize) -> Timeline {
    match rows.and_then(|rows| Timeline::from_rows(&rows, skip_rows)) {
        Ok(timeline) => timeline,
        Err(e) => {
            eprintln!("{}", format!("Error loading events: {e}").red());
            Timeline::default()
        }
    }
}
