use async_trait::async_trait;
use tracing::warn;

use super::{Command, CommandContext};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;

/// Fetch and show the sender's profile, with status-code-aware error text.
pub struct ProfileCommand;

fn profile_error_text(error: &BotError) -> &'static str {
    match error.status() {
        Some(400) => "That user id is not valid.",
        // 404 means the user never added the bot or has blocked it.
        Some(404) => "Add the bot as a friend first!",
        _ => "Could not fetch your profile right now.",
    }
}

#[async_trait]
impl Command for ProfileCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        let Some(user_id) = ctx.source.user_id() else {
            return api
                .reply(
                    ctx.reply_token,
                    vec![messages::text("No user id available on this event.")],
                )
                .await;
        };

        match api.get_profile(user_id).await {
            Ok(profile) => {
                let text = format!(
                    "Profile\nDisplay name: {}\nUser ID: {}\nPicture: {}\nStatus: {}",
                    profile.display_name,
                    profile.user_id,
                    profile.picture_url.as_deref().unwrap_or("none"),
                    profile.status_message.as_deref().unwrap_or("not set"),
                );
                api.reply(ctx.reply_token, vec![messages::text(&text)]).await
            }
            Err(e) => {
                warn!(user_id, "profile fetch failed: {}", e);
                api.reply(ctx.reply_token, vec![messages::text(profile_error_text(&e))])
                    .await
            }
        }
    }
}
