//! Builders for plain outbound message objects.

use serde_json::{Value, json};

#[must_use]
pub fn text(body: &str) -> Value {
    json!({ "type": "text", "text": body })
}

/// Text message quoting the message the user sent.
#[must_use]
pub fn text_quoting(body: &str, quote_token: Option<&str>) -> Value {
    match quote_token {
        Some(token) => json!({ "type": "text", "text": body, "quoteToken": token }),
        None => text(body),
    }
}

#[must_use]
pub fn location(title: &str, address: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "type": "location",
        "title": title,
        "address": address,
        "latitude": latitude,
        "longitude": longitude,
    })
}

/// Text message mentioning a single user via substitution.
#[must_use]
pub fn mention_user(body: &str, user_id: &str, quote_token: Option<&str>) -> Value {
    let mut message = json!({
        "type": "textV2",
        "text": body,
        "substitution": {
            "user": {
                "type": "mention",
                "mentionee": { "type": "user", "userId": user_id }
            }
        }
    });
    if let Some(token) = quote_token {
        message["quoteToken"] = Value::String(token.to_string());
    }
    message
}

/// Text message mentioning everyone in the chat. Notifies every member, so
/// callers should use it sparingly.
#[must_use]
pub fn mention_all(body: &str, quote_token: Option<&str>) -> Value {
    let mut message = json!({
        "type": "textV2",
        "text": body,
        "substitution": {
            "everyone": {
                "type": "mention",
                "mentionee": { "type": "all" }
            }
        }
    });
    if let Some(token) = quote_token {
        message["quoteToken"] = Value::String(token.to_string());
    }
    message
}
