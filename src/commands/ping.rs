use std::time::Instant;

use async_trait::async_trait;

use super::{Command, CommandContext};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;

/// Round-trip check: acknowledge and report the measured handling time.
pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        let started = Instant::now();
        let elapsed = started.elapsed();

        api.reply(
            ctx.reply_token,
            vec![
                messages::text_quoting("ok!", ctx.quote_token),
                messages::text(&format!("time: {:.5}s", elapsed.as_secs_f64())),
            ],
        )
        .await
    }
}
