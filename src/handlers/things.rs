//! LINE Things events: IoT device link/unlink and scenario results.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Event;

pub struct ThingsHandler {
    api: Arc<dyn MessagingApi>,
}

impl ThingsHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for ThingsHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Things {
            reply_token,
            things,
            ..
        } = event
        else {
            return Err(BotError::HandlerError(
                "things handler received a non-things event".to_string(),
            ));
        };

        info!(
            device_id = %things.device_id,
            things_type = %things.things_type,
            "things event received"
        );

        let device_id = &things.device_id;
        let reply = match things.things_type.as_str() {
            "link" => format!("IoT device {device_id} is now connected."),
            "unlink" => format!("IoT device {device_id} was disconnected."),
            "scenarioResult" => {
                format!("Received a scenario result from IoT device {device_id}.")
            }
            other => format!("Event received from IoT device {device_id}.\nType: {other}"),
        };
        self.api.reply(reply_token, vec![messages::text(&reply)]).await
    }
}
