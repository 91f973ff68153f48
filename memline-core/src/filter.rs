//! Tag and date-range filtering of the event collection.

use std::collections::BTreeSet;

use crate::date_range::DateRange;
use crate::error::MemlineError;
use crate::event::Event;

/// The sentinel tag value that disables tag filtering.
pub const ALL_TAGS: &str = "All";

/// A tag selection from the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub enum TagSelection {
    /// Ignore tags; only the date predicate applies.
    All,
    /// Keep events whose tag is a member of the set.
    Tags(BTreeSet<String>),
}

impl TagSelection {
    /// Build a selection from user-picked tags.
    ///
    /// A selection containing the "All" sentinel disables tag filtering.
    /// An empty selection matches nothing.
    pub fn from_selected<I>(selected: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let tags: BTreeSet<String> = selected.into_iter().collect();

        if tags.contains(ALL_TAGS) {
            TagSelection::All
        } else {
            TagSelection::Tags(tags)
        }
    }

    fn matches(&self, tag: &str) -> bool {
        match self {
            TagSelection::All => true,
            TagSelection::Tags(tags) => tags.contains(tag),
        }
    }
}

/// An event excluded from a filter pass because its stored date fields do
/// not form a valid calendar date.
#[derive(Debug)]
pub struct SkippedEvent {
    /// Position of the event in the input collection.
    pub index: usize,
    pub headline: String,
    pub reason: MemlineError,
}

/// Result of one filter pass.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedEvent>,
}

/// Filter events by tag selection and inclusive date range.
///
/// The filter is stable: surviving events keep their original relative
/// order. Events with a defective date triple are excluded and reported in
/// `skipped` rather than failing the whole pass. The tag predicate is
/// checked first, so a defective date on an unselected event is not
/// reported. Pure function: no side effects, same inputs give same output.
pub fn filter_events(
    events: &[Event],
    selection: &TagSelection,
    range: DateRange,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for (index, event) in events.iter().enumerate() {
        if !selection.matches(&event.tag) {
            continue;
        }

        match event.start_date.to_naive() {
            Ok(date) if range.contains(date) => outcome.events.push(event.clone()),
            Ok(_) => {}
            Err(reason) => outcome.skipped.push(SkippedEvent {
                index,
                headline: event.headline.clone(),
                reason,
            }),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rows_to_events;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_events() -> Vec<Event> {
        let rows: Vec<Vec<String>> = [
            ["A", "desc", "url1", "cap1", "2023", "5", "10", "trip"],
            ["B", "desc2", "url2", "cap2", "2023", "6", "1", "work"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect();

        rows_to_events(&rows, 0).unwrap().0
    }

    fn selected(tags: &[&str]) -> TagSelection {
        TagSelection::from_selected(tags.iter().map(|s| s.to_string()))
    }

    fn headlines(outcome: &FilterOutcome) -> Vec<String> {
        outcome.events.iter().map(|e| e.headline.clone()).collect()
    }

    #[test]
    fn test_all_sentinel_applies_date_predicate_only() {
        let events = sample_events();
        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 31));

        let outcome = filter_events(&events, &selected(&["All"]), range);

        assert_eq!(headlines(&outcome), vec!["A"]);
    }

    #[test]
    fn test_tag_selection_intersects_both_predicates() {
        let events = sample_events();
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let outcome = filter_events(&events, &selected(&["work"]), range);

        assert_eq!(headlines(&outcome), vec!["B"]);
    }

    #[test]
    fn test_sentinel_among_other_tags_still_disables_tag_filter() {
        let events = sample_events();
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let outcome = filter_events(&events, &selected(&["trip", "All"]), range);

        assert_eq!(headlines(&outcome), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let events = sample_events();
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let outcome = filter_events(&events, &selected(&[]), range);

        assert!(outcome.events.is_empty());
    }

    #[test]
    fn test_boundary_dates_are_included() {
        let events = sample_events();

        // Event A is dated exactly 2023-05-10
        let on_start = DateRange::new(date(2023, 5, 10), date(2023, 5, 20));
        let on_end = DateRange::new(date(2023, 5, 1), date(2023, 5, 10));

        assert_eq!(
            headlines(&filter_events(&events, &TagSelection::All, on_start)),
            vec!["A"]
        );
        assert_eq!(
            headlines(&filter_events(&events, &TagSelection::All, on_end)),
            vec!["A"]
        );
    }

    #[test]
    fn test_one_day_outside_bound_is_excluded() {
        let events = sample_events();

        let just_after = DateRange::new(date(2023, 5, 11), date(2023, 5, 20));
        let just_before = DateRange::new(date(2023, 5, 1), date(2023, 5, 9));

        assert!(filter_events(&events, &TagSelection::All, just_after)
            .events
            .is_empty());
        assert!(filter_events(&events, &TagSelection::All, just_before)
            .events
            .is_empty());
    }

    #[test]
    fn test_filter_preserves_original_relative_order() {
        let events = sample_events();
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let outcome = filter_events(&events, &TagSelection::All, range);

        assert_eq!(headlines(&outcome), vec!["A", "B"]);
    }

    #[test]
    fn test_filter_is_idempotent_and_pure() {
        let events = sample_events();
        let selection = selected(&["work"]);
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let first = filter_events(&events, &selection, range);
        let second = filter_events(&events, &selection, range);

        assert_eq!(first.events, second.events);
        assert_eq!(events.len(), 2, "input collection is untouched");
    }

    #[test]
    fn test_defective_date_is_skipped_and_reported() {
        let mut events = sample_events();
        events[1].start_date.day = "32".to_string();
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let outcome = filter_events(&events, &TagSelection::All, range);

        assert_eq!(headlines(&outcome), vec!["A"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].index, 1);
        assert_eq!(outcome.skipped[0].headline, "B");
        assert!(matches!(
            outcome.skipped[0].reason,
            MemlineError::InvalidEventDate { .. }
        ));
    }

    #[test]
    fn test_defective_date_on_unselected_tag_is_not_reported() {
        let mut events = sample_events();
        events[1].start_date.day = "32".to_string();
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31));

        let outcome = filter_events(&events, &selected(&["trip"]), range);

        assert_eq!(headlines(&outcome), vec!["A"]);
        assert!(outcome.skipped.is_empty());
    }
}
