//! Time-range filter of the order history.
//!
//! Holds the bounds being edited and, separately, the range that was last
//! applied. Only the applied range is ever fetched or exported.

use chrono::NaiveDate;
use shared::{DateRange, DateRangeError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRangeFilter {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    applied: Option<DateRange>,
}

impl TimeRangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Rejects a start later than the current end.
    pub fn set_start(&mut self, date: NaiveDate) -> Result<(), DateRangeError> {
        if let Some(end) = self.end
            && date > end
        {
            return Err(DateRangeError::EndBeforeStart { start: date, end });
        }
        self.start = Some(date);
        Ok(())
    }

    /// Rejects an end earlier than the current start.
    pub fn set_end(&mut self, date: NaiveDate) -> Result<(), DateRangeError> {
        if let Some(start) = self.start
            && date < start
        {
            return Err(DateRangeError::EndBeforeStart { start, end: date });
        }
        self.end = Some(date);
        Ok(())
    }

    /// Both bounds are set
    pub fn can_apply(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Anything to clear
    pub fn can_clear(&self) -> bool {
        self.start.is_some() || self.end.is_some() || self.applied.is_some()
    }

    /// Promote the edited bounds to the applied range.
    ///
    /// Fails without touching the applied range when a bound is missing.
    pub fn apply(&mut self) -> Result<DateRange, DateRangeError> {
        let range = DateRange::from_bounds(self.start, self.end)?;
        self.applied = Some(range);
        Ok(range)
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.applied = None;
    }

    /// Normalized filter output; `None` when no filter is active
    pub fn applied(&self) -> Option<DateRange> {
        self.applied
    }
}
