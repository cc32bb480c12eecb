/// Utilities for dates in the seller lists
///
/// Formatting for table cells and evaluation of the date-range filter buckets
use chrono::{Datelike, Duration, Local, NaiveDate};
use contracts::shared::list::DateBucket;

/// Current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format date as M/D/YYYY (table cells)
/// Example: 2023-04-02 -> "4/2/2023"
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Parse ISO date string, accepts "2024-03-15" and "2024-03-15T14:02:26Z"
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Most recent Sunday on or before `today`
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let days_from_sunday = today.weekday().num_days_from_sunday();
    today - Duration::days(i64::from(days_from_sunday))
}

/// (year, month) of the calendar month before `today`
fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

/// Checks whether `date` falls into `bucket` relative to `today`
pub fn in_bucket(date: NaiveDate, bucket: DateBucket, today: NaiveDate) -> bool {
    match bucket {
        DateBucket::All => true,
        DateBucket::Today => date == today,
        DateBucket::Yesterday => today.pred_opt() == Some(date),
        DateBucket::ThisWeek => date >= week_start(today) && date <= today,
        DateBucket::ThisMonth => date.year() == today.year() && date.month() == today.month(),
        DateBucket::LastMonth => (date.year(), date.month()) == previous_month(today),
    }
}
