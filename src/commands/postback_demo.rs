use async_trait::async_trait;
use serde_json::{Value, json};

use super::{Command, CommandContext};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::flex;

const CARD_COLOR: &str = "#007BFF";

/// Send a card with buttons that exercise every postback action the
/// postback event handler understands.
pub struct PostbackDemoCommand;

fn demo_card() -> Value {
    let hero = flex::header(
        "Postback test",
        "Press a button; each one sends a different data encoding.",
        CARD_COLOR,
    );

    let json_data = json!({
        "action": "json_test",
        "data": { "id": "demo-1", "name": "demo", "timestamp": "now" }
    })
    .to_string();

    let body = flex::body(vec![
        flex::postback_button("Basic test", "action=basic_test&type=button", "#28A745"),
        flex::postback_button(
            "Parameter test",
            "action=param_test&user=demo&value=42",
            "#6C757D",
        ),
        flex::postback_button("JSON test", &json_data, "#FFC107"),
        flex::postback_button(
            "Silent test",
            "action=silent_test&notification=false",
            "#6F42C1",
        ),
    ]);

    flex::message("Postback test buttons", flex::bubble(hero, body, None))
}

#[async_trait]
impl Command for PostbackDemoCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        api.reply(ctx.reply_token, vec![demo_card()]).await
    }
}
