//! Single-reply and log-only event handlers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Event;

pub struct VideoPlayCompleteHandler {
    api: Arc<dyn MessagingApi>,
}

impl VideoPlayCompleteHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for VideoPlayCompleteHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::VideoPlayComplete {
            reply_token,
            video_play_complete,
            ..
        } = event
        else {
            return Err(BotError::HandlerError(
                "video-play-complete handler received the wrong event type".to_string(),
            ));
        };

        info!(tracking_id = %video_play_complete.tracking_id, "video playback finished");
        self.api
            .reply(
                reply_token,
                vec![messages::text("Playback complete. Thanks for watching!")],
            )
            .await
    }
}

pub struct AccountLinkHandler {
    api: Arc<dyn MessagingApi>,
}

impl AccountLinkHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for AccountLinkHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::AccountLink {
            reply_token, link, ..
        } = event
        else {
            return Err(BotError::HandlerError(
                "account-link handler received the wrong event type".to_string(),
            ));
        };

        info!(result = %link.result, "account link event");

        let reply = if link.result == "ok" {
            "Your account is now linked. Extra features are unlocked!"
        } else {
            "Account linking failed. Please try again."
        };
        self.api.reply(reply_token, vec![messages::text(reply)]).await
    }
}

/// Unsend carries no reply token, and replying to a retraction would be
/// rude anyway.
pub struct UnsendHandler;

#[async_trait]
impl EventHandler for UnsendHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Unsend { unsend, .. } = event else {
            return Err(BotError::HandlerError(
                "unsend handler received a non-unsend event".to_string(),
            ));
        };

        info!(message_id = %unsend.message_id, "message unsent");
        Ok(())
    }
}
