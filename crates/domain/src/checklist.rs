use chrono::{DateTime, Utc};

/// A task attached to an `Event` that has to be done before its due date
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub due_date: Option<DateTime<Utc>>,
    /// Deadline relative to the event start as configured by the user
    pub deadline_hours: Option<u32>,
    pub completed: bool,
}

impl ChecklistItem {
    /// Due date of an open item. Completed items and items without a
    /// due date are never reminded about.
    pub fn pending_due_date(&self) -> Option<DateTime<Utc>> {
        if self.completed {
            None
        } else {
            self.due_date
        }
    }
}
