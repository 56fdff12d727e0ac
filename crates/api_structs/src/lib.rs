mod reminders;
mod status;

pub use crate::reminders::api::*;
pub use crate::status::api::*;
