use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::EventHandler;
use crate::errors::BotError;
use crate::line::client::MessagingApi;
use crate::line::messages;
use crate::webhook::events::Event;

pub struct BeaconHandler {
    api: Arc<dyn MessagingApi>,
}

impl BeaconHandler {
    #[must_use]
    pub fn new(api: Arc<dyn MessagingApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EventHandler for BeaconHandler {
    async fn handle(&self, event: &Event) -> Result<(), BotError> {
        let Event::Beacon {
            reply_token,
            beacon,
            ..
        } = event
        else {
            return Err(BotError::HandlerError(
                "beacon handler received a non-beacon event".to_string(),
            ));
        };

        info!(beacon_type = %beacon.beacon_type, hwid = %beacon.hwid, "beacon detected");

        let reply = match beacon.beacon_type.as_str() {
            "enter" => format!("You entered a beacon area!\nHardware ID: {}", beacon.hwid),
            "leave" => format!("You left the beacon area.\nHardware ID: {}", beacon.hwid),
            other => format!(
                "Beacon detected.\nType: {other}\nHardware ID: {}",
                beacon.hwid
            ),
        };
        self.api.reply(reply_token, vec![messages::text(&reply)]).await
    }
}
