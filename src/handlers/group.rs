//! Group lifecycle events: join/leave and member churn.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Event;

pub struct JoinHandler {
    api: Arc<dyn MessagingApi>,
}

impl JoinHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for JoinHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Join {
            reply_token,
            source,
        } = event
        else {
            return Err(BotError::HandlerError(
                "join handler received a non-join event".to_string(),
            ));
        };

        info!(chat_id = source.chat_id(), "joined a chat");
        self.api
            .reply(
                reply_token,
                vec![messages::text("Hello! Thanks for the invite.")],
            )
            .await
    }
}

/// Leave carries no reply token.
pub struct LeaveHandler;

#[async_trait]
impl EventHandler for LeaveHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Leave { source } = event else {
            return Err(BotError::HandlerError(
                "leave handler received a non-leave event".to_string(),
            ));
        };

        info!(chat_id = source.chat_id(), "left a chat");
        Ok(())
    }
}

pub struct MemberJoinedHandler {
    api: Arc<dyn MessagingApi>,
}

impl MemberJoinedHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for MemberJoinedHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::MemberJoined {
            reply_token,
            joined,
            ..
        } = event
        else {
            return Err(BotError::HandlerError(
                "member-joined handler received the wrong event type".to_string(),
            ));
        };

        let count = joined.members.len();
        info!(count, "members joined");

        let welcome = if count == 1 {
            "A new member joined us. Welcome!".to_string()
        } else {
            format!("{count} new members joined us. Welcome!")
        };
        self.api.reply(reply_token, vec![messages::text(&welcome)]).await
    }
}

/// MemberLeft carries no reply token.
pub struct MemberLeftHandler;

#[async_trait]
impl EventHandler for MemberLeftHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::MemberLeft { left, .. } = event else {
            return Err(BotError::HandlerError(
                "member-left handler received the wrong event type".to_string(),
            ));
        };

        info!(count = left.members.len(), "members left");
        Ok(())
    }
}
