mod inmemory;
mod telegram;

pub use inmemory::{InMemoryMessenger, SentMessage};
pub use telegram::TelegramApi;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("No bot token has been configured")]
    MissingToken,
    #[error("Request to the messaging api failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The messaging api rejected the message: {0}")]
    Rejected(String),
}

/// Outbound channel the reminders are delivered through
#[async_trait::async_trait]
pub trait IMessenger: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}
