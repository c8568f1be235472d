//! Text messages: `/`-prefixed strings go to the command router, anything
//! else is echoed back.

use tracing::debug;

use crate::commands::{CommandContext, CommandRegistry};
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Source;

pub async fn handle(
    api: &dyn MessagingApi,
    commands: &CommandRegistry,
    reply_token: &str,
    source: &Source,
    text: &str,
    quote_token: Option<&str>,
) -> Result<(), BotError> {
    debug!(text, "text message received");

    if text.starts_with('/') {
        return handle_command(api, commands, reply_token, source, text, quote_token).await;
    }

    // Plain text gets echoed, quoting the original message.
    api.reply(reply_token, vec![messages::text_quoting(text, quote_token)])
        .await
}

async fn handle_command(
    api: &dyn MessagingApi,
    commands: &CommandRegistry,
    reply_token: &str,
    source: &Source,
    invocation: &str,
    quote_token: Option<&str>,
) -> Result<(), BotError> {
    let Some(command) = commands.route(invocation) else {
        let text = format!("Unknown command: {invocation}\nDid you mean /help?");
        return api.reply(reply_token, vec![messages::text(&text)]).await;
    };

    let ctx = CommandContext {
        invocation,
        reply_token,
        source,
        quote_token,
    };
    command.execute(api, &ctx).await
}
