//! Message events: second-level dispatch by message content type.

use std::sync::Arc;

use async_trait::async_trait;

use super::{location, media, text};
use crate::commands::CommandRegistry;
use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::webhook::events::{Event, MessageContent};

pub struct MessageEventHandler {
    api: Arc<dyn MessagingApi>,
    commands: CommandRegistry,
}

impl MessageEventHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>, commands: CommandRegistry) -> Self {
        Self { api, commands }
    }
}

#[async_trait]
impl EventHandler for MessageEventHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Message {
            reply_token,
            source,
            message,
        } = event
        else {
            return Err(BotError::HandlerError(
                "message handler received a non-message event".to_string(),
            ));
        };

        match message {
            MessageContent::Text {
                text: body,
                quote_token,
                ..
            } => {
                text::handle(
                    self.api.as_ref(),
                    &self.commands,
                    reply_token,
                    source,
                    body,
                    quote_token.as_deref(),
                )
                .await
            }
            MessageContent::Location {
                title,
                address,
                latitude,
                longitude,
                ..
            } => {
                location::handle(
                    self.api.as_ref(),
                    reply_token,
                    title.as_deref(),
                    address.as_deref(),
                    *latitude,
                    *longitude,
                )
                .await
            }
            other => media::handle(self.api.as_ref(), reply_token, other).await,
        }
    }
}
