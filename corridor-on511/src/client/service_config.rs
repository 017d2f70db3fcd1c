use serde::{Deserialize, Serialize};

/// Serializable connection settings for the 511 service.
/// Builds to an [`super::On511Client`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// language code passed as `lang` on every request
    pub language: String,
    /// per-request timeout in seconds. Defaults to 30
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://511on.ca"),
            language: String::from("en"),
            request_timeout_secs: 30,
            user_agent: format!("corridor-on511/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
