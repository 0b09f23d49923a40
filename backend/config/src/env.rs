//! Environment loading.
//!
//! Every key is optional. Empty values count as unset, and an unparseable
//! port falls back to the default.

use std::collections::HashMap;

use crate::defaults::{
    DEFAULT_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_CODEGEN_MODEL, DEFAULT_LOG_DIR,
    DEFAULT_LOG_LEVEL, DEFAULT_OCR_MODEL, DEFAULT_PORT,
};
use crate::schema::{AppConfig, LoggingConfig, ProviderConfig};

pub const AI_API_KEY: &str = "AI_API_KEY";
pub const TEST_MODE: &str = "TEST_MODE";
pub const TRUSTED_ORIGINS: &str = "TRUSTED_ORIGINS";
pub const AI_BASE_URL: &str = "AI_BASE_URL";
pub const OCR_MODEL: &str = "OCR_MODEL";
pub const CODEGEN_MODEL: &str = "CODEGEN_MODEL";
pub const BIND: &str = "GEOFORGE_BIND";
pub const PORT: &str = "GEOFORGE_PORT";
pub const LOG_DIR: &str = "GEOFORGE_LOG_DIR";
pub const LOG_LEVEL: &str = "RUST_LOG";

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or(default).to_string();

        Self {
            bind_address: or(BIND, DEFAULT_BIND_ADDRESS),
            port: get(PORT).and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT),
            ai_api_key: get(AI_API_KEY).map(str::to_string),
            test_mode: vars.get(TEST_MODE).is_some_and(|v| parse_flag(v)),
            trusted_origins: get(TRUSTED_ORIGINS).map(parse_origin_list).unwrap_or_default(),
            provider: ProviderConfig {
                base_url: or(AI_BASE_URL, DEFAULT_BASE_URL),
                ocr_model: or(OCR_MODEL, DEFAULT_OCR_MODEL),
                codegen_model: or(CODEGEN_MODEL, DEFAULT_CODEGEN_MODEL),
            },
            logging: LoggingConfig {
                level: or(LOG_LEVEL, DEFAULT_LOG_LEVEL),
                dir: or(LOG_DIR, DEFAULT_LOG_DIR),
            },
        }
    }
}

/// Only the exact string `true` enables a flag; surrounding whitespace does not.
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

/// Split a comma-separated origin list, trimming entries and dropping empty ones.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
