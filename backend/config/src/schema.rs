//! Runtime configuration schema.
//!
//! One `AppConfig` is built at startup and handed to every component that
//! needs it; nothing reads the environment after that.

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_CODEGEN_MODEL, DEFAULT_LOG_DIR,
    DEFAULT_LOG_LEVEL, DEFAULT_OCR_MODEL, DEFAULT_PORT, DEFAULT_TRUSTED_ORIGINS,
};

/// Root configuration for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Provider credential; `None` means demo mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_api_key: Option<String>,
    /// Forces demo mode even when a credential is present
    pub test_mode: bool,
    /// Operator-supplied origin patterns, appended to the defaults
    #[serde(default)]
    pub trusted_origins: Vec<String>,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub base_url: String,
    pub ocr_model: String,
    pub codegen_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub level: String,
    pub dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            ai_api_key: None,
            test_mode: false,
            trusted_origins: Vec::new(),
            provider: ProviderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ocr_model: DEFAULT_OCR_MODEL.to_string(),
            codegen_model: DEFAULT_CODEGEN_MODEL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl AppConfig {
    /// Whether the stages should return canned output instead of calling the provider.
    pub fn demo_mode(&self) -> bool {
        self.ai_api_key.is_none() || self.test_mode
    }

    /// The credential to use for live provider calls, if demo mode is off.
    pub fn live_api_key(&self) -> Option<&str> {
        if self.test_mode {
            return None;
        }
        self.ai_api_key.as_deref()
    }

    /// Built-in trusted origins followed by the operator's entries.
    pub fn all_trusted_origins(&self) -> Vec<String> {
        DEFAULT_TRUSTED_ORIGINS
            .iter()
            .map(|o| o.to_string())
            .chain(self.trusted_origins.iter().cloned())
            .collect()
    }
}
