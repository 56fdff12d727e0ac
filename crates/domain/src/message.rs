use crate::date::{format_date, format_time};
use chrono::{NaiveDate, NaiveDateTime};

const HOURS_PER_DAY: i64 = 24;

/// Human readable phrase for the whole hours left until something happens
pub fn describe_remaining(hours: i64) -> String {
    match hours {
        h if h <= 0 => "now".to_string(),
        1 => "in 1 hour".to_string(),
        h if h < HOURS_PER_DAY => format!("in {} hours", h),
        h => match h / HOURS_PER_DAY {
            1 => "in 1 day".to_string(),
            days => format!("in {} days", days),
        },
    }
}

/// Escapes characters with a meaning in the legacy Telegram `Markdown` mode
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Display fields of an event that reached one of its reminder offsets
#[derive(Debug, Clone)]
pub struct AttendanceReminder<'a> {
    pub event_type: &'a str,
    pub start: NaiveDateTime,
    pub hours_until_start: i64,
}

impl AttendanceReminder<'_> {
    pub fn format(&self) -> String {
        format!(
            "🔔 *Reminder: {}*\n\n📅 {}\n🕐 {}\n⏳ Starts {}",
            escape_markdown(self.event_type),
            format_date(&self.start.date()),
            format_time(&self.start.time()),
            describe_remaining(self.hours_until_start),
        )
    }
}

/// Display fields of a checklist item inside its firing window
#[derive(Debug, Clone)]
pub struct ChecklistReminder<'a> {
    pub item: &'a str,
    pub event_type: &'a str,
    pub event_date: NaiveDate,
    /// Due date in the tenant's local time
    pub due: NaiveDateTime,
    pub hours_until_due: i64,
}

impl ChecklistReminder<'_> {
    pub fn format(&self) -> String {
        format!(
            "📋 *Checklist reminder*\n\n*{}*\n📅 {} on {}\n⏰ Due {} at {} ({})",
            escape_markdown(self.item),
            escape_markdown(self.event_type),
            format_date(&self.event_date),
            format_date(&self.due.date()),
            format_time(&self.due.time()),
            describe_remaining(self.hours_until_due),
        )
    }
}
