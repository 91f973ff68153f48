use std::path::PathBuf;

use anyhow::Result;
use memline_core::config::MemlineConfig;
use memline_core::date_range::DateRange;
use memline_core::document::{TimelineDocument, TitleBlock};
use memline_core::filter::{TagSelection, filter_events};
use memline_remote::SheetStore;
use owo_colors::OwoColorize;

use super::{create_spinner, pluralize, timeline_or_empty};

pub async fn run(
    config: &MemlineConfig,
    tags: Vec<String>,
    range: DateRange,
    out: Option<PathBuf>,
) -> Result<()> {
    let store = SheetStore::new(config);

    let spinner = create_spinner("Loading events".to_string());
    let rows = store.load_all().await;
    spinner.finish_and_clear();

    // Store failures and row defects render an empty timeline, not an abort
    let timeline = timeline_or_empty(rows, config.header_rows);

    // No --tag flags behaves like the default "All" pick
    let selection = if tags.is_empty() {
        TagSelection::All
    } else {
        TagSelection::from_selected(tags)
    };

    let outcome = filter_events(&timeline.events, &selection, range);

    for skipped in &outcome.skipped {
        eprintln!(
            "{}",
            format!("Skipping '{}': {}", skipped.headline, skipped.reason).dimmed()
        );
    }

    let document = TimelineDocument::new(TitleBlock::from_config(config), &outcome.events);
    let json = document.to_json()?;

    match out {
        Some(path) => {
            std::fs::write(&path, &json)?;
            println!(
                "Wrote {} {} to {}",
                outcome.events.len(),
                pluralize("event", outcome.events.len()),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
