use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable naming a JSON config file.
const CONFIG_FILE_VAR: &str = "SHEET_COURIER_CONFIG";
/// Environment variable overriding the endpoint base URL directly.
const ENDPOINT_VAR: &str = "SHEET_COURIER_ENDPOINT";

/// Configuration for the API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://drips-logs-processing-server-6c4069d1815a.herokuapp.com"
                .to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolves configuration from, in order: a JSON file named by
    /// `SHEET_COURIER_CONFIG`, the `SHEET_COURIER_ENDPOINT` variable, and
    /// the built-in default. Invalid values fall back with a warning.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_FILE_VAR) {
            match std::fs::read_to_string(&path) {
                Ok(raw) => match serde_json::from_str::<ApiConfig>(&raw) {
                    Ok(config) => return config.validated(),
                    Err(e) => log::warn!("Ignoring malformed config {}: {}", path, e),
                },
                Err(e) => log::warn!("Cannot read config {}: {}", path, e),
            }
        }

        if let Ok(base_url) = std::env::var(ENDPOINT_VAR) {
            return ApiConfig { base_url }.validated();
        }

        ApiConfig::default()
    }

    /// The upload endpoint: the fixed `/file` path under the base URL.
    pub fn upload_url(&self) -> String {
        format!("{}/file", self.base_url.trim_end_matches('/'))
    }

    fn validated(self) -> Self {
        match Url::parse(&self.base_url) {
            Ok(_) => self,
            Err(e) => {
                log::warn!(
                    "Configured endpoint {:?} is not a valid URL ({}), using default",
                    self.base_url,
                    e
                );
                ApiConfig::default()
            }
        }
    }
}
