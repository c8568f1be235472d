//! Shared building blocks for Flex (visual card) messages.
//!
//! Handlers assemble their cards from these primitives; each card is a
//! nested `serde_json::Value` in the shape the Flex container API expects.

use serde_json::{Value, json};

/// Wrap a bubble into a sendable flex message object.
#[must_use]
pub fn message(alt_text: &str, bubble: Value) -> Value {
    json!({
        "type": "flex",
        "altText": alt_text,
        "contents": bubble,
    })
}

/// A bubble with a colored hero header, a body, and an optional footer.
#[must_use]
pub fn bubble(hero: Value, body: Value, footer: Option<Value>) -> Value {
    let mut bubble = json!({
        "type": "bubble",
        "hero": hero,
        "body": body,
    });
    if let Some(footer) = footer {
        bubble["footer"] = footer;
    }
    bubble
}

/// Colored header box with a bold title and a smaller subtitle.
#[must_use]
pub fn header(title: &str, subtitle: &str, color: &str) -> Value {
    json!({
        "type": "box",
        "layout": "vertical",
        "contents": [
            { "type": "text", "text": title, "weight": "bold", "size": "xl", "color": "#ffffff" },
            { "type": "text", "text": subtitle, "size": "md", "color": "#ffffff", "wrap": true },
        ],
        "backgroundColor": color,
        "paddingAll": "20px",
        "spacing": "md",
    })
}

#[must_use]
pub fn body(contents: Vec<Value>) -> Value {
    json!({
        "type": "box",
        "layout": "vertical",
        "contents": contents,
        "spacing": "sm",
        "paddingAll": "20px",
    })
}

#[must_use]
pub fn footer(contents: Vec<Value>) -> Value {
    json!({
        "type": "box",
        "layout": "vertical",
        "contents": contents,
        "spacing": "sm",
        "paddingAll": "20px",
    })
}

#[must_use]
pub fn section_title(text: &str, color: &str) -> Value {
    json!({ "type": "text", "text": text, "weight": "bold", "size": "md", "color": color })
}

#[must_use]
pub fn separator() -> Value {
    json!({ "type": "separator", "margin": "sm" })
}

/// Label/value line: grey label on the left, wrapped value on the right.
#[must_use]
pub fn info_row(label: &str, value: &str) -> Value {
    json!({
        "type": "box",
        "layout": "baseline",
        "contents": [
            { "type": "text", "text": label, "size": "sm", "color": "#666666", "flex": 2 },
            { "type": "text", "text": value, "size": "sm", "wrap": true, "flex": 3, "maxLines": 3 },
        ],
        "margin": "md",
    })
}

#[must_use]
pub fn note(text: &str, color: &str) -> Value {
    json!({
        "type": "text",
        "text": text,
        "size": "sm",
        "color": color,
        "align": "center",
        "weight": "bold",
        "wrap": true,
        "margin": "md",
    })
}

#[must_use]
pub fn uri_button(label: &str, uri: &str, color: &str) -> Value {
    json!({
        "type": "button",
        "style": "primary",
        "color": color,
        "action": { "type": "uri", "label": label, "uri": uri },
    })
}

#[must_use]
pub fn postback_button(label: &str, data: &str, color: &str) -> Value {
    json!({
        "type": "button",
        "style": "primary",
        "color": color,
        "action": { "type": "postback", "label": label, "data": data },
    })
}
