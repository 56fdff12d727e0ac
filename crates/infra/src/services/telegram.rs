use super::{DeliveryError, IMessenger};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Envelope every Telegram Bot API response is wrapped in
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramResponse {
    fn into_result(self) -> Result<Value, DeliveryError> {
        if self.ok {
            Ok(self.result.unwrap_or(Value::Null))
        } else {
            Err(DeliveryError::Rejected(
                self.description
                    .unwrap_or_else(|| "No description given".to_string()),
            ))
        }
    }
}

pub struct TelegramApi {
    client: Client,
    base_url: String,
    bot_token: Option<String>,
}

impl TelegramApi {
    pub fn new(base_url: String, bot_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token,
        }
    }

    fn method_url(&self, method: &str) -> Result<String, DeliveryError> {
        let token = self
            .bot_token
            .as_deref()
            .ok_or(DeliveryError::MissingToken)?;
        Ok(format!("{}/bot{}/{}", self.base_url, token, method))
    }
}

#[async_trait::async_trait]
impl IMessenger for TelegramApi {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        let body = SendMessageBody {
            chat_id,
            text,
            parse_mode: "Markdown",
        };
        let response = self
            .client
            .post(self.method_url("sendMessage")?)
            .json(&body)
            .send()
            .await?;

        // Rejections come with an error status but still carry the envelope
        response
            .json::<TelegramResponse>()
            .await?
            .into_result()
            .map(|_| ())
    }
}
