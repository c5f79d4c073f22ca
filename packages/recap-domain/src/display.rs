//! Display-string derivation for note timestamps.

use time::OffsetDateTime;

/// `YYYY.MM.DD`, zero-padded.
pub fn display_date(ts: OffsetDateTime) -> String {
	format!("{:04}.{:02}.{:02}", ts.year(), ts.month() as u8, ts.day())
}

/// `HH:MM`, 24-hour clock.
pub fn display_time(ts: OffsetDateTime) -> String {
	format!("{:02}:{:02}", ts.hour(), ts.minute())
}

/// Full English weekday name, e.g. `Monday`.
pub fn display_day(ts: OffsetDateTime) -> String {
	ts.weekday().to_string()
}
