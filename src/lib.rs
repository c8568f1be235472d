//! linebridge - a LINE Messaging API webhook bot.
//!
//! The crate receives webhook callbacks over HTTPS, verifies the
//! `X-Line-Signature` HMAC, classifies each event in the delivery into a
//! typed [`webhook::events::Event`], and fans the batch out to per-event
//! handlers that compose replies through the LINE reply API.
//!
//! # Architecture
//!
//! - `webhook` owns signature verification and payload classification
//! - `dispatch` owns the immutable handler registry and the isolated
//!   concurrent fan-out over one callback's events
//! - `handlers` hold the per-event-type behavior, with a second-level
//!   dispatch by message content type and a `/`-prefixed command router
//! - `line` wraps the outbound messaging API (reply, profile, loading
//!   animation) behind a trait so tests can record traffic
//! - `server` exposes the axum routes (`/`, `/health`, `/callback`)
//!
//! The HTTP caller is acknowledged as soon as the signature and envelope
//! check out; event processing continues on a detached task.

pub mod commands;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod geo;
pub mod handlers;
pub mod line;
pub mod server;
pub mod webhook;

/// Configure structured logging with a JSON formatter.
///
/// Honors `RUST_LOG`; defaults to `info` when unset. Call once at process
/// start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
