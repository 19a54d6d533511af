use chrono::{Datelike, NaiveDate, Utc};

/// Wire format for calendar dates (`startDate`, `endDate`, export file names)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current UTC calendar date
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current UTC year
pub fn current_year() -> i32 {
    today_utc().year()
}

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
