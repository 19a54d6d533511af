//! Calendar date range used by the order filter and the CSV export.
//!
//! A `DateRange` is always complete: both bounds are set and
//! `start <= end`. Half-specified ranges live only in the filter that is
//! being edited and never reach the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::format_iso_date;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("date range needs both a start and an end date")]
    Incomplete,
}

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from two optional bounds; both must be present.
    pub fn from_bounds(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, DateRangeError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(DateRangeError::Incomplete),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `startDate` / `endDate` query parameters
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("startDate", format_iso_date(self.start)),
            ("endDate", format_iso_date(self.end)),
        ]
    }
}
