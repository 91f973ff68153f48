//! Timeline event types and the backing-store row schema.
//!
//! The backing sheet holds one event per row with fixed column positions:
//! `Event Headline, Event Text, Image URL, Media Caption, Year, Month, Day, Tag`.
//! Both the transform (read path) and append (write path) rely on this order.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{MemlineError, MemlineResult};

/// Number of columns in a backing-store row.
pub const ROW_FIELDS: usize = 8;

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub headline: String,
    pub description: String,
    /// Public URL of the attached image. May be empty.
    pub media_url: String,
    pub media_caption: String,
    pub start_date: EventDate,
    /// Free-text classification label used for filtering. May be empty.
    pub tag: String,
}

/// A calendar date stored as three text fields, the way the sheet holds it.
///
/// The triple is not validated at ingest; it is only checked when a real
/// calendar date is needed (at filter time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl EventDate {
    pub fn from_naive(date: NaiveDate) -> Self {
        EventDate {
            year: date.year().to_string(),
            month: date.month().to_string(),
            day: date.day().to_string(),
        }
    }

    /// Parse the text triple into a calendar date.
    ///
    /// Fails with `InvalidEventDate` when a field does not parse as an
    /// integer or the triple is not a real date (e.g. February 30th).
    pub fn to_naive(&self) -> MemlineResult<NaiveDate> {
        let invalid = || MemlineError::InvalidEventDate {
            year: self.year.clone(),
            month: self.month.clone(),
            day: self.day.clone(),
        };

        let year: i32 = self.year.trim().parse().map_err(|_| invalid())?;
        let month: u32 = self.month.trim().parse().map_err(|_| invalid())?;
        let day: u32 = self.day.trim().parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }
}

impl Event {
    /// Build an event from a raw store row.
    ///
    /// `index` is the row's position in the fetched sheet, used for error
    /// reporting. Rows shorter than the schema are rejected; extra trailing
    /// fields are ignored.
    pub fn from_row(index: usize, row: &[String]) -> MemlineResult<Self> {
        if row.len() < ROW_FIELDS {
            return Err(MemlineError::MalformedRow {
                row: index,
                fields: row.len(),
            });
        }

        Ok(Event {
            headline: row[0].clone(),
            description: row[1].clone(),
            media_url: row[2].clone(),
            media_caption: row[3].clone(),
            start_date: EventDate {
                year: row[4].clone(),
                month: row[5].clone(),
                day: row[6].clone(),
            },
            tag: row[7].clone(),
        })
    }

    /// Serialize to the store's column order for append.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.headline.clone(),
            self.description.clone(),
            self.media_url.clone(),
            self.media_caption.clone(),
            self.start_date.year.clone(),
            self.start_date.month.clone(),
            self.start_date.day.clone(),
            self.tag.clone(),
        ]
    }
}
