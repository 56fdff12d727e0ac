use chrono::prelude::*;

const TIMESTAMP_WITH_OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const TIME_OF_DAY_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parses a timestamp as written by the data store or by clients.
///
/// Timestamps without an offset are read as UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }
    for format in TIMESTAMP_WITH_OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(value, format) {
            return Some(datetime.with_timezone(&Utc));
        }
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parses a bare `HH:MM` or `HH:MM:SS` time of day
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// `dd.MM.yyyy`
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `HH:mm`
pub fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
