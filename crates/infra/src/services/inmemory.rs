use super::{DeliveryError, IMessenger};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat_id: String,
    pub text: String,
}

/// Messenger that records every delivered message instead of sending it
pub struct InMemoryMessenger {
    sent: Mutex<Vec<SentMessage>>,
    rejected_chat_ids: Vec<String>,
}

impl InMemoryMessenger {
    pub fn new() -> Self {
        Self::rejecting(Vec::new())
    }

    /// Messages to any of `chat_ids` fail like a rejected api call
    pub fn rejecting(chat_ids: Vec<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            rejected_chat_ids: chat_ids,
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for InMemoryMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMessenger for InMemoryMessenger {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        if self.rejected_chat_ids.iter().any(|id| id == chat_id) {
            return Err(DeliveryError::Rejected(format!(
                "Bad Request: chat {} not found",
                chat_id
            )));
        }
        let message = SentMessage {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        };
        match self.sent.lock() {
            Ok(mut sent) => sent.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
        Ok(())
    }
}
