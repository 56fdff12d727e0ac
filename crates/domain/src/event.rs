use crate::{
    checklist::ChecklistItem,
    date::{parse_instant, parse_time_of_day},
    shared::entity::ID,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use thiserror::Error;

/// How the start of an `Event` has been stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventStart {
    /// Bare `HH:MM` that is combined with the date of the event
    TimeOfDay(NaiveTime),
    /// Full timestamp
    Timestamp(DateTime<Utc>),
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidStartTime {
    #[error("Start time: `{0}` is neither a time of day nor a timestamp")]
    Malformed(String),
}

impl FromStr for EventStart {
    type Err = InvalidStartTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(time) = parse_time_of_day(s) {
            return Ok(Self::TimeOfDay(time));
        }
        parse_instant(s)
            .map(Self::Timestamp)
            .ok_or_else(|| InvalidStartTime::Malformed(s.to_string()))
    }
}

/// A single attendance occurrence (rehearsal, concert, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub tenant_id: ID,
    pub date: NaiveDate,
    pub start_time: Option<EventStart>,
    pub type_id: Option<ID>,
    pub checklist: Vec<ChecklistItem>,
}

impl Event {
    pub fn new(id: ID, tenant_id: ID, date: NaiveDate) -> Self {
        Self {
            id,
            tenant_id,
            date,
            start_time: None,
            type_id: None,
            checklist: Vec::new(),
        }
    }

    /// The instant the event starts at.
    ///
    /// A bare time of day is combined with the date without any zone
    /// conversion, which makes it a UTC instant.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        match self.start_time? {
            EventStart::TimeOfDay(time) => Some(Utc.from_utc_datetime(&self.date.and_time(time))),
            EventStart::Timestamp(ts) => Some(ts),
        }
    }

    /// Start as shown to humans. A bare time of day is already local,
    /// full timestamps are converted into `tz`.
    pub fn local_start(&self, tz: Tz) -> Option<NaiveDateTime> {
        match self.start_time? {
            EventStart::TimeOfDay(time) => Some(self.date.and_time(time)),
            EventStart::Timestamp(ts) => Some(ts.with_timezone(&tz).naive_local()),
        }
    }

    /// Open checklist items together with their due dates
    pub fn pending_checklist(&self) -> impl Iterator<Item = (&ChecklistItem, DateTime<Utc>)> {
        self.checklist
            .iter()
            .filter_map(|item| item.pending_due_date().map(|due| (item, due)))
    }
}
