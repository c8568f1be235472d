use async_trait::async_trait;
use tracing::info;

use super::{Command, CommandContext};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;

const HQ_TITLE: &str = "National Police Agency";
const HQ_ADDRESS: &str = "2-1-2 Kasumigaseki, Chiyoda City, Tokyo 100-8974, Japan";
const HQ_LATITUDE: f64 = 35.674_710;
const HQ_LONGITUDE: f64 = 139.752_040;

/// Send the fixed location of the National Police Agency headquarters.
pub struct PoliceCommand;

#[async_trait]
impl Command for PoliceCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        info!(address = HQ_ADDRESS, "sending police HQ location");

        api.reply(
            ctx.reply_token,
            vec![
                messages::location(HQ_TITLE, HQ_ADDRESS, HQ_LATITUDE, HQ_LONGITUDE),
                messages::text("You're surrounded!!"),
            ],
        )
        .await
    }
}
