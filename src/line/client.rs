//! LINE Messaging API client.
//!
//! Wraps the reply/profile/loading-animation endpoints with retry logic and
//! error mapping. Handlers talk to [`MessagingApi`] rather than the concrete
//! client so tests can record outbound traffic.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tokio_retry::RetryIf;

use crate::errors::BotError;

const DEFAULT_BASE_URL: &str = "https://api.line.me";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub user_id: String,
    pub picture_url: Option<String>,
    pub status_message: Option<String>,
}

/// Capability surface of the outbound messaging API.
#[async_trait]
pub trait MessagingApi: Send + Sync {
    /// Send up to five messages against a single-use reply token.
    async fn reply(&self, reply_token: &str, messages: Vec<Value>) -> Result<(), BotError>;

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, BotError>;

    /// Show the typing/loading indicator in a 1:1 chat for `seconds`.
    async fn show_loading_animation(&self, chat_id: &str, seconds: u32) -> Result<(), BotError>;
}

/// HTTP implementation of [`MessagingApi`] against the LINE platform.
pub struct LineClient {
    http: Client,
    access_token: String,
    base_url: String,
}

impl LineClient {
    #[must_use]
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different origin. Used by tests.
    #[must_use]
    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            access_token,
            base_url,
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, BotError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, BotError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        RetryIf::start(strategy, operation, BotError::retryable).await
    }

    async fn post_json(&self, path: &str, payload: &Value) -> Result<(), BotError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(BotError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl MessagingApi for LineClient {
    async fn reply(&self, reply_token: &str, messages: Vec<Value>) -> Result<(), BotError> {
        let payload = json!({
            "replyToken": reply_token,
            "messages": messages,
        });

        self.with_retry(|| async { self.post_json("/v2/bot/message/reply", &payload).await })
            .await
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, BotError> {
        self.with_retry(|| async {
            let response = self
                .http
                .get(format!("{}/v2/bot/profile/{}", self.base_url, user_id))
                .bearer_auth(&self.access_token)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(BotError::ApiError {
                    status: status.as_u16(),
                    message,
                });
            }

            Ok(response.json::<UserProfile>().await?)
        })
        .await
    }

    async fn show_loading_animation(&self, chat_id: &str, seconds: u32) -> Result<(), BotError> {
        let payload = json!({
            "chatId": chat_id,
            "loadingSeconds": seconds,
        });

        self.with_retry(|| async { self.post_json("/v2/bot/chat/loading/start", &payload).await })
            .await
    }
}
