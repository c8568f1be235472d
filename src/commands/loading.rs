use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use super::{Command, CommandContext};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;

const LOADING_SECONDS: u32 = 5;

/// Show the loading animation, wait it out, then confirm. The animation
/// API only works in 1:1 chats.
pub struct LoadingCommand;

#[async_trait]
impl Command for LoadingCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        if !ctx.source.is_user_chat() {
            return api
                .reply(
                    ctx.reply_token,
                    vec![messages::text(
                        "The loading animation is only available in 1:1 chats.",
                    )],
                )
                .await;
        }

        let chat_id = ctx.source.chat_id();
        info!(chat_id, "starting loading animation");
        api.show_loading_animation(chat_id, LOADING_SECONDS).await?;

        // Let the animation finish before the completion message lands.
        tokio::time::sleep(Duration::from_millis(u64::from(LOADING_SECONDS) * 1000 + 500)).await;
        api.reply(ctx.reply_token, vec![messages::text("Loading finished!")])
            .await
    }
}
