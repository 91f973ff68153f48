//! Raw store rows → events + tag set.

use std::collections::BTreeSet;

use crate::error::MemlineResult;
use crate::event::Event;

/// Map raw sheet rows into events, collecting the set of distinct tags.
///
/// `skip_rows` drops that many leading rows before mapping, so a sheet that
/// keeps a header row can be configured to ignore it. Row order is preserved.
/// Any remaining row shorter than the schema fails the whole pass with
/// `MalformedRow`; nothing is silently truncated.
pub fn rows_to_events(
    rows: &[Vec<String>],
    skip_rows: usize,
) -> MemlineResult<(Vec<Event>, BTreeSet<String>)> {
    let mut events = Vec::with_capacity(rows.len().saturating_sub(skip_rows));
    let mut tags = BTreeSet::new();

    for (index, row) in rows.iter().enumerate().skip(skip_rows) {
        let event = Event::from_row(index, row)?;
        tags.insert(event.tag.clone());
        events.push(event);
    }

    Ok((events, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MemlineError;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn sample_rows() -> Vec<Vec<String>> {
        rows(&[
            &["A", "desc", "url1", "cap1", "2023", "5", "10", "trip"],
            &["B", "desc2", "url2", "cap2", "2023", "6", "1", "work"],
            &["C", "desc3", "url3", "cap3", "2024", "1", "2", "trip"],
        ])
    }

    #[test]
    fn test_one_event_per_row_in_order() {
        let (events, _) = rows_to_events(&sample_rows(), 0).unwrap();

        let headlines: Vec<&str> = events.iter().map(|e| e.headline.as_str()).collect();
        assert_eq!(headlines, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_tag_set_is_distinct_values_of_tag_column() {
        let (_, tags) = rows_to_events(&sample_rows(), 0).unwrap();

        let expected: Vec<&str> = vec!["trip", "work"];
        let actual: Vec<&str> = tags.iter().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_skip_rows_drops_leading_header() {
        let mut data = rows(&[&[
            "Event Headline",
            "Event Text",
            "Image URL",
            "Media Caption",
            "Year",
            "Month",
            "Day",
            "Tag",
        ]]);
        data.extend(sample_rows());

        let (events, tags) = rows_to_events(&data, 1).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].headline, "A");
        assert!(!tags.contains("Tag"));
    }

    #[test]
    fn test_skip_rows_zero_treats_header_as_data() {
        let mut data = rows(&[&[
            "Event Headline",
            "Event Text",
            "Image URL",
            "Media Caption",
            "Year",
            "Month",
            "Day",
            "Tag",
        ]]);
        data.extend(sample_rows());

        let (events, tags) = rows_to_events(&data, 0).unwrap();

        assert_eq!(events.len(), 4);
        assert!(tags.contains("Tag"));
    }

    #[test]
    fn test_short_row_fails_with_malformed_row() {
        let mut data = sample_rows();
        data.push(rows(&[&["D", "desc", "url", "cap", "2024"]]).remove(0));

        let err = rows_to_events(&data, 0).unwrap_err();

        assert!(matches!(
            err,
            MemlineError::MalformedRow { row: 3, fields: 5 }
        ));
    }

    #[test]
    fn test_empty_input_yields_empty_collection() {
        let (events, tags) = rows_to_events(&[], 0).unwrap();

        assert!(events.is_empty());
        assert!(tags.is_empty());
    }
}
