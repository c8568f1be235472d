//! Command sub-router for text messages starting with `/`.
//!
//! Commands are looked up verbatim in a static map built once at startup;
//! aliases map several strings onto one implementation. No argument parsing
//! happens here - a command sees its invocation string and the event
//! context, nothing more.

mod loading;
mod mention;
mod ping;
mod police;
mod postback_demo;
mod profile;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Source;

pub use loading::LoadingCommand;
pub use mention::MentionCommand;
pub use ping::PingCommand;
pub use police::PoliceCommand;
pub use postback_demo::PostbackDemoCommand;
pub use profile::ProfileCommand;

pub const HELP_TEXT: &str = "Available commands:\n\
/help - show this help\n\
/ping - liveness check\n\
/loading - show the loading animation (1:1 chats only)\n\
/mention - mention test (group chats only)\n\
/allmention - mention everyone (group chats only, use sparingly)\n\
/postback - postback test (message with buttons)\n\
/police - send the National Police Agency HQ location\n\
/profile - show your profile";

/// Event context a command executes against.
pub struct CommandContext<'a> {
    /// The verbatim command string the user typed, e.g. `/allmention`.
    pub invocation: &'a str,
    pub reply_token: &'a str,
    pub source: &'a Source,
    pub quote_token: Option<&'a str>,
}

#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError>;
}

struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    async fn execute(
        &self,
        api: &dyn MessagingApi,
        ctx: &CommandContext<'_>,
    ) -> Result<(), BotError> {
        api.reply(ctx.reply_token, vec![messages::text(HELP_TEXT)])
            .await
    }
}

/// Static mapping from command string to implementation.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// The standard command set, aliases included.
    #[must_use]
    pub fn standard() -> Self {
        let mut commands: HashMap<&'static str, Arc<dyn Command>> = HashMap::new();

        let ping = Arc::new(PingCommand);
        commands.insert("/help", Arc::new(HelpCommand));
        commands.insert("/ping", ping.clone());
        commands.insert("/test", ping);
        commands.insert("/loading", Arc::new(LoadingCommand));
        let mention = Arc::new(MentionCommand);
        commands.insert("/mention", mention.clone());
        commands.insert("/allmention", mention);
        commands.insert("/postback", Arc::new(PostbackDemoCommand));
        commands.insert("/police", Arc::new(PoliceCommand));
        commands.insert("/profile", Arc::new(ProfileCommand));

        Self { commands }
    }

    /// Look up a command by its verbatim invocation string.
    #[must_use]
    pub fn route(&self, invocation: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(invocation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
