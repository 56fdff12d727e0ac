mod base;
mod reminders;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use reminders::RemindersClient;
pub use reminders::TriggerMethod;
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

pub use attendance_reminders_api_structs::get_service_health::APIResponse as ServiceHealth;
pub use attendance_reminders_api_structs::send_reminders::APIResponse as RemindersSent;

/// Attendance Reminders SDK
///
/// The SDK contains methods for triggering the reminder invocations of the
/// attendance reminders server API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub reminders: RemindersClient,
    pub status: StatusClient,
}

impl ReminderSDK {
    /// Client that sends no credential
    pub fn new(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    pub fn new_with_api_key<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let reminders = RemindersClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminders, status }
    }
}
