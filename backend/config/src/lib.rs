//! `geoforge-config` — runtime configuration for the analysis service.
//!
//! Provides:
//! - Typed config schema (provider, trust list, server, logging)
//! - Environment loading with defaults
//! - Config redaction for safe logging
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use defaults::DEFAULT_TRUSTED_ORIGINS;
pub use env::{parse_flag, parse_origin_list};
pub use redact::redact;
pub use schema::{AppConfig, LoggingConfig, ProviderConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

/// Validate a config and log every warning and error it produced.
pub fn validate_and_log(config: &AppConfig) -> ValidationReport {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    report
}
