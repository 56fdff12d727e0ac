use crate::{APIResponse, BaseClient};
use attendance_reminders_api_structs::send_reminders;
use reqwest::{Method, StatusCode};
use std::sync::Arc;

/// HTTP method a reminder invocation is triggered with. Scheduled triggers
/// usually POST, manual ones may GET with an api key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMethod {
    Get,
    Post,
}

impl From<TriggerMethod> for Method {
    fn from(method: TriggerMethod) -> Self {
        match method {
            TriggerMethod::Get => Method::GET,
            TriggerMethod::Post => Method::POST,
        }
    }
}

#[derive(Clone)]
pub struct RemindersClient {
    base: Arc<BaseClient>,
}

impl RemindersClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send_attendance_reminders(
        &self,
        method: TriggerMethod,
    ) -> APIResponse<send_reminders::APIResponse> {
        self.base
            .send(
                method.into(),
                "send-attendance-reminders".into(),
                StatusCode::OK,
            )
            .await
    }

    pub async fn send_checklist_reminders(
        &self,
        method: TriggerMethod,
    ) -> APIResponse<send_reminders::APIResponse> {
        self.base
            .send(
                method.into(),
                "send-checklist-reminders".into(),
                StatusCode::OK,
            )
            .await
    }
}
