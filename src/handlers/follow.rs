use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Event;

pub struct FollowHandler {
    api: Arc<dyn MessagingApi>,
}

impl FollowHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for FollowHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Follow {
            reply_token,
            source,
        } = event
        else {
            return Err(BotError::HandlerError(
                "follow handler received a non-follow event".to_string(),
            ));
        };

        info!(user_id = source.user_id(), "new follower");
        self.api
            .reply(
                reply_token,
                vec![messages::text("Thanks for following! Say hi anytime.")],
            )
            .await
    }
}

/// Unfollow carries no reply token; there is nothing to send, only to log.
pub struct UnfollowHandler;

#[async_trait]
impl EventHandler for UnfollowHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Unfollow { source } = event else {
            return Err(BotError::HandlerError(
                "unfollow handler received a non-unfollow event".to_string(),
            ));
        };

        info!(user_id = source.user_id(), "user unfollowed");
        Ok(())
    }
}
