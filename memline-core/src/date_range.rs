//! Inclusive date range for filtering events.

use chrono::NaiveDate;

/// Inclusive calendar-date range.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Parse CLI args into a DateRange. Missing ends are unbounded.
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> Result<Self, String> {
        Ok(DateRange {
            from: from.map(parse_date).transpose()?,
            to: to.map(parse_date).transpose()?,
        })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
