mod checklist;
mod date;
mod event;
mod event_type;
mod message;
mod recipient;
mod shared;
mod tenant;
mod time_window;

pub use checklist::ChecklistItem;
pub use date::{format_date, format_time, parse_instant, parse_time_of_day};
pub use event::{Event, EventStart, InvalidStartTime};
pub use event_type::EventType;
pub use message::{describe_remaining, escape_markdown, AttendanceReminder, ChecklistReminder};
pub use recipient::{resolve_recipients, Recipient, RecipientConfig, ReminderCategory};
pub use shared::entity::ID;
pub use tenant::{Tenant, TenantTimezones, DEFAULT_TIMEZONE};
pub use time_window::{checklist_item_due, hours_until_due, hours_until_start, LocalMinute};

pub use chrono_tz::Tz;
