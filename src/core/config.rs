use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub channel_secret: String,
    pub channel_access_token: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `LINE_CHANNEL_SECRET` and `LINE_CHANNEL_ACCESS_TOKEN` are required;
    /// the process refuses to start without them. `BIND_ADDR` is optional.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            channel_secret: env::var("LINE_CHANNEL_SECRET")
                .map_err(|e| format!("LINE_CHANNEL_SECRET: {e}"))?,
            channel_access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN")
                .map_err(|e| format!("LINE_CHANNEL_ACCESS_TOKEN: {e}"))?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}
