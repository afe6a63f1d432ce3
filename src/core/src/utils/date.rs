use chrono::{DateTime, NaiveDate, Utc};

pub struct DateUtils;

impl DateUtils {
    /// Calendar date of an instant, always in UTC.
    ///
    /// Every date-only comparison in the crate goes through here so that a
    /// kickoff at 23:59 UTC never lands on the next day because of a local
    /// offset.
    #[inline]
    pub fn utc_date(instant: DateTime<Utc>) -> NaiveDate {
        instant.date_naive()
    }

    pub fn parse_kickoff(value: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    pub fn format_kickoff(instant: DateTime<Utc>) -> String {
        instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}
