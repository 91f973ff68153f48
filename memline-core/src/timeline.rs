//! Per-invocation timeline context.

use std::collections::BTreeSet;

use crate::error::MemlineResult;
use crate::event::Event;
use crate::transform::rows_to_events;

/// The in-memory event collection for one render cycle.
///
/// Built fresh from the backing store on every invocation and threaded
/// through the commands; the store stays the sole source of truth across
/// sessions.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    pub events: Vec<Event>,
    pub tags: BTreeSet<String>,
}

impl Timeline {
    pub fn from_rows(rows: &[Vec<String>], skip_rows: usize) -> MemlineResult<Self> {
        let (events, tags) = rows_to_events(rows, skip_rows)?;
        Ok(Timeline { events, tags })
    }

    /// Record a newly stored event so it is visible without a reload.
    pub fn push(&mut self, event: Event) {
        self.tags.insert(event.tag.clone());
        self.events.push(event);
    }
}
