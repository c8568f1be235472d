//! Postback events: opaque data strings coming back from interactive
//! elements, either JSON or URL-query encoded.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::{flex, messages};
use crate::webhook::events::Event;

pub struct PostbackHandler {
    api: Arc<dyn MessagingApi>,
}

impl PostbackHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }

    async fn reply_result(
        &self,
        reply_token: &str,
        test_type: &str,
        result_text: &str,
    ) -> Result<(), BotError> {
        let card = result_card(test_type, result_text);
        self.api.reply(reply_token, vec![card]).await
    }

    async fn reply_unknown_action(&self, reply_token: &str, action: &str) -> Result<(), BotError> {
        let text = format!("Unknown action: {action}\nThat operation is not supported.");
        self.api.reply(reply_token, vec![messages::text(&text)]).await
    }
}

#[async_trait]
impl EventHandler for PostbackHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Postback {
            reply_token,
            postback,
            ..
        } = event
        else {
            return Err(BotError::HandlerError(
                "postback handler received a non-postback event".to_string(),
            ));
        };

        info!(data = %postback.data, "postback received");

        // JSON payloads start with '{'; everything else is query-encoded.
        if postback.data.starts_with('{') {
            self.handle_json(reply_token, &postback.data).await
        } else {
            self.handle_query(reply_token, &postback.data).await
        }
    }
}

impl PostbackHandler {
    async fn handle_json(&self, reply_token: &str, data: &str) -> Result<(), BotError> {
        let parsed: Value = match serde_json::from_str(data) {
            Ok(value) => value,
            Err(e) => {
                warn!("postback JSON parse error: {}", e);
                return self
                    .api
                    .reply(
                        reply_token,
                        vec![messages::text("Could not parse the postback JSON data.")],
                    )
                    .await;
            }
        };

        let action = parsed.get("action").and_then(Value::as_str).unwrap_or("unknown");
        if action != "json_test" {
            return self.reply_unknown_action(reply_token, action).await;
        }

        let detail = parsed.get("data").cloned().unwrap_or(Value::Null);
        let id = detail.get("id").and_then(Value::as_str).unwrap_or("n/a");
        let name = detail.get("name").and_then(Value::as_str).unwrap_or("n/a");
        let timestamp = detail
            .get("timestamp")
            .and_then(Value::as_str)
            .unwrap_or("n/a");

        let result = format!(
            "JSON data test result:\nID: {id}\nName: {name}\nTimestamp: {timestamp}\nEncoding: JSON"
        );
        self.reply_result(reply_token, "JSON", &result).await
    }

    async fn handle_query(&self, reply_token: &str, data: &str) -> Result<(), BotError> {
        let params = parse_query(data);
        let action = params.get("action").map_or("unknown", String::as_str);

        match action {
            "basic_test" => {
                let test_type = params.get("type").map_or("unknown", String::as_str);
                let result = format!(
                    "Basic test finished\nTest type: {test_type}\nEncoding: URL query"
                );
                self.reply_result(reply_token, "Basic", &result).await
            }
            "param_test" => {
                let user = params.get("user").map_or("n/a", String::as_str);
                let value = params.get("value").map_or("n/a", String::as_str);
                let result = format!(
                    "Parameter test result:\nUser: {user}\nValue: {value}\nEncoding: URL query"
                );
                self.reply_result(reply_token, "Parameter", &result).await
            }
            "silent_test" => {
                let notification = params.get("notification").map_or("true", String::as_str);
                let result = format!(
                    "Silent test finished\nNotification: {notification}\nThis button sends silently, so pressing it shows nothing in the chat."
                );
                self.reply_result(reply_token, "Silent", &result).await
            }
            other => self.reply_unknown_action(reply_token, other).await,
        }
    }
}

/// Decode a URL-query-encoded postback data string into key/value pairs.
/// Later duplicates win; undecodable values are kept verbatim.
fn parse_query(data: &str) -> HashMap<String, String> {
    data.split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some((key.to_string(), value))
        })
        .collect()
}

fn result_color(test_type: &str) -> &'static str {
    match test_type {
        "Basic" => "#28A745",
        "Parameter" => "#6C757D",
        "JSON" => "#FFC107",
        "Silent" => "#6F42C1",
        _ => "#007BFF",
    }
}

fn result_card(test_type: &str, result_text: &str) -> Value {
    let color = result_color(test_type);

    let hero = flex::header(
        &format!("{test_type} test finished"),
        "Postback event result",
        color,
    );
    let body = flex::body(vec![
        flex::section_title("Result:", color),
        flex::separator(),
        serde_json::json!({
            "type": "text",
            "text": result_text,
            "size": "sm",
            "wrap": true,
            "margin": "md",
        }),
    ]);

    flex::message(
        &format!("{test_type} test finished - postback result"),
        flex::bubble(hero, body, None),
    )
}
