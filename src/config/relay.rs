//! Message relay credentials
//!
//! The contact form posts through a hosted email relay. Until the three
//! credentials are filled in, the relay is treated as unconfigured and every
//! submit fails without a network call.

use serde::Deserialize;

/// Default relay endpoint (EmailJS REST API)
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Values shipped in the config template; treated the same as empty
const PLACEHOLDERS: [&str; 3] = ["YOUR_SERVICE_ID", "YOUR_TEMPLATE_ID", "YOUR_PUBLIC_KEY"];

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Relay settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileRelay {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub endpoint: Option<String>,
}

/// Relay overrides read from the environment
#[derive(Debug, Default)]
pub struct RelayEnv {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub endpoint: Option<String>,
}

impl RelayConfig {
    /// Merge env > file > defaults
    pub fn from_file(file: Option<FileRelay>, env: RelayEnv) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            service_id: env
                .service_id
                .or(file.service_id)
                .unwrap_or(defaults.service_id),
            template_id: env
                .template_id
                .or(file.template_id)
                .unwrap_or(defaults.template_id),
            public_key: env
                .public_key
                .or(file.public_key)
                .unwrap_or(defaults.public_key),
            endpoint: env
                .endpoint
                .or(file.endpoint)
                .unwrap_or(defaults.endpoint),
        }
    }

    /// All three credentials are set to something other than a placeholder
    pub fn is_configured(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .into_iter()
            .all(|value| {
                let value = value.trim();
                !value.is_empty() && !PLACEHOLDERS.contains(&value)
            })
    }
}
