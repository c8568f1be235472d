//! Inbound webhook surface: signature verification and event classification.

pub mod events;
pub mod parser;
pub mod signature;
