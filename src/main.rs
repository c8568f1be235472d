use std::process;
use std::sync::Arc;

use tracing::info;

use linebridge::core::config::AppConfig;
use linebridge::dispatch::Dispatcher;
use linebridge::handlers::build_registry;
use linebridge::line::client::LineClient;
use linebridge::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    linebridge::setup_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            process::exit(1);
        }
    };

    let client = Arc::new(LineClient::new(config.channel_access_token.clone()));
    let registry = build_registry(client);
    let dispatcher = Arc::new(Dispatcher::new(registry));

    info!(handlers = dispatcher.handler_count(), "starting linebridge");

    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        config: Arc::new(config),
        dispatcher,
    };
    server::serve(&bind_addr, state).await
}
