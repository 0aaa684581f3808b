/// Base URL used when `PACKDESK_API_BASE_URL` is unset, matching the
/// optimizer service's default mount point.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api/v1";

/// External configuration of the console. Nothing else is persisted.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("PACKDESK_API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self { api_base_url }
    }

    /// Timeouts are fixed in `ClientSettings`, not user-tunable.
    pub fn client_settings(&self) -> packdesk_client::ClientSettings {
        packdesk_client::ClientSettings::new(self.api_base_url.clone())
    }
}
