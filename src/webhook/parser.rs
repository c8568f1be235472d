use serde_json::Value;
use tracing::{info, warn};

use super::events::Event;
use super::signature;
use crate::errors::BotError;

/// Verify and classify one webhook delivery.
///
/// Runs signature verification before touching the payload; a missing or
/// mismatching signature rejects the whole request. A malformed envelope is
/// a [`BotError::ParseError`]. Individual events with an unrecognized or
/// undecodable discriminant are logged and skipped - one odd entry must not
/// sink the rest of the batch. An empty `events` array parses successfully;
/// the platform sends such deliveries to verify the endpoint.
///
/// # Errors
///
/// `InvalidSignature` when verification fails, `ParseError` when the
/// envelope is not the expected shape.
pub fn parse(body: &str, signature: Option<&str>, secret: &str) -> Result<Vec<Event>, BotError> {
    let header = signature.ok_or(BotError::InvalidSignature)?;
    if !signature::verify(body.as_bytes(), header, secret) {
        return Err(BotError::InvalidSignature);
    }

    let envelope: Value =
        serde_json::from_str(body).map_err(|e| BotError::ParseError(e.to_string()))?;
    let raw_events = envelope
        .get("events")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::ParseError("envelope has no events array".to_string()))?;

    let mut events = Vec::with_capacity(raw_events.len());
    for raw in raw_events {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("<missing>")
            .to_string();
        match serde_json::from_value::<Event>(raw.clone()) {
            Ok(event) => events.push(event),
            Err(e) => {
                // Unknown discriminants are expected as the platform adds
                // event types; a known type that fails to decode is not.
                if e.to_string().contains("unknown variant") {
                    info!(event_type = %kind, "skipping event with unrecognized type");
                } else {
                    warn!(event_type = %kind, "skipping undecodable event: {}", e);
                }
            }
        }
    }

    Ok(events)
}
