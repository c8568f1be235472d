use async_trait::async_trait;
use tracing::info;

use super::{Command, CommandContext};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;

/// Mention test for group chats. `/mention` mentions the sender,
/// `/allmention` mentions everyone in the chat.
pub struct MentionCommand;

#[async_trait]
impl Command for MentionCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        if ctx.source.is_user_chat() {
            return api
                .reply(
                    ctx.reply_token,
                    vec![messages::text("Mentions are not available in 1:1 chats.")],
                )
                .await;
        }

        if ctx.invocation == "/allmention" {
            info!("sending all-mention test");
            return api
                .reply(
                    ctx.reply_token,
                    vec![messages::mention_all(
                        "{everyone} mention-everyone test.",
                        ctx.quote_token,
                    )],
                )
                .await;
        }

        let Some(user_id) = ctx.source.user_id() else {
            return api
                .reply(
                    ctx.reply_token,
                    vec![messages::text("Cannot mention you: no user id on this event.")],
                )
                .await;
        };

        api.reply(
            ctx.reply_token,
            vec![messages::mention_user(
                "{user} hello! This is a mention test.",
                user_id,
                ctx.quote_token,
            )],
        )
        .await
    }
}
