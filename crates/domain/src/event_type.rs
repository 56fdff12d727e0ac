use crate::shared::entity::ID;

/// Category of `Event`s, carrying the reminder rules for all its events
#[derive(Debug, Clone, PartialEq)]
pub struct EventType {
    pub id: ID,
    pub name: String,
    pub tenant_id: ID,
    /// Whether reminders should be sent for events of this type at all
    pub notification: bool,
    /// Hours before the start of an event at which a reminder fires
    pub reminders: Vec<u32>,
}

impl EventType {
    pub fn has_reminders(&self) -> bool {
        self.notification && !self.reminders.is_empty()
    }

    /// An event fires only when the rounded hour count hits one of the
    /// configured offsets exactly.
    pub fn reminder_due(&self, hours_until_start: i64) -> bool {
        self.reminders
            .iter()
            .any(|offset| i64::from(*offset) == hours_until_start)
    }
}
