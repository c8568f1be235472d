//! Outbound messaging: the LINE API client and payload builders.

pub mod client;
pub mod flex;
pub mod messages;
