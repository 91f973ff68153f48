use anyhow::Result;
use memline_core::config::MemlineConfig;
use memline_remote::SheetStore;
use owo_colors::OwoColorize;

use super::{create_spinner, pluralize, timeline_or_empty};

pub async fn run(config: &MemlineConfig) -> Result<()> {
    let store = SheetStore::new(config);

    let spinner = create_spinner("Loading events".to_string());
    let rows = store.load_all().await;
    spinner.finish_and_clear();

    let timeline = timeline_or_empty(rows, config.header_rows);

    if timeline.tags.is_empty() {
        println!("{}", "No tags found".dimmed());
        return Ok(());
    }

    for tag in &timeline.tags {
        let count = timeline.events.iter().filter(|e| &e.tag == tag).count();
        let label = if tag.is_empty() { "(untagged)" } else { tag };
        println!(
            "  {} {}",
            label,
            format!("({} {})", count, pluralize("event", count)).dimmed()
        );
    }

    Ok(())
}
