//! Shared test double for the outbound messaging API.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use linebridge::errors::BotError;
use linebridge::line::client::{MessagingApi, UserProfile};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Reply {
        reply_token: String,
        messages: Vec<Value>,
    },
    GetProfile {
        user_id: String,
    },
    Loading {
        chat_id: String,
        seconds: u32,
    },
}

/// Records every outbound call; optionally fails replies or profile
/// lookups with configurable errors.
#[derive(Default)]
pub struct RecordingApi {
    pub calls: Mutex<Vec<ApiCall>>,
    pub fail_replies: bool,
    pub profile_error_status: Option<u16>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_replies() -> Self {
        Self {
            fail_replies: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// All reply calls, as (reply token, messages) pairs.
    pub fn replies(&self) -> Vec<(String, Vec<Value>)> {
        self.recorded()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Reply {
                    reply_token,
                    messages,
                } => Some((reply_token, messages)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl MessagingApi for RecordingApi {
    async fn reply(&self, reply_token: &str, messages: Vec<Value>) -> Result<(), BotError> {
        self.calls.lock().unwrap().push(ApiCall::Reply {
            reply_token: reply_token.to_string(),
            messages,
        });
        if self.fail_replies {
            return Err(BotError::ApiError {
                status: 429,
                message: "rate limit exceeded".to_string(),
            });
        }
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, BotError> {
        self.calls.lock().unwrap().push(ApiCall::GetProfile {
            user_id: user_id.to_string(),
        });
        if let Some(status) = self.profile_error_status {
            return Err(BotError::ApiError {
                status,
                message: "profile fetch failed".to_string(),
            });
        }
        Ok(UserProfile {
            display_name: "Test User".to_string(),
            user_id: user_id.to_string(),
            picture_url: None,
            status_message: Some("hello".to_string()),
        })
    }

    async fn show_loading_animation(&self, chat_id: &str, seconds: u32) -> Result<(), BotError> {
        self.calls.lock().unwrap().push(ApiCall::Loading {
            chat_id: chat_id.to_string(),
            seconds,
        });
        Ok(())
    }
}

/// Flatten every text field in a reply's messages for content assertions.
pub fn message_texts(messages: &[Value]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|m| m.get("text").and_then(Value::as_str).map(String::from))
        .collect()
}
