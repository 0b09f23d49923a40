//! Config validation with user-friendly error messages.

use crate::schema::AppConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &AppConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_provider(config, &mut report);
    validate_origins(config, &mut report);
    report
}

fn validate_provider(config: &AppConfig, report: &mut ValidationReport) {
    let provider = &config.provider;
    if provider.base_url.trim().is_empty() {
        report.error("provider.baseUrl", "Base URL cannot be empty");
    } else if !is_http_url(&provider.base_url) {
        report.error("provider.baseUrl", "Base URL must start with http:// or https://");
    }
    if provider.ocr_model.trim().is_empty() {
        report.error("provider.ocrModel", "Model name cannot be empty");
    }
    if provider.codegen_model.trim().is_empty() {
        report.error("provider.codegenModel", "Model name cannot be empty");
    }
    if config.demo_mode() {
        report.warn(
            "aiApiKey",
            "No credential configured or test mode enabled; serving demo results",
        );
    }
}

fn validate_origins(config: &AppConfig, report: &mut ValidationReport) {
    for (i, origin) in config.trusted_origins.iter().enumerate() {
        if !is_http_url(origin) {
            report.warn(
                format!("trustedOrigins[{i}]"),
                format!("Pattern '{origin}' has no http(s) scheme and will never match a browser origin"),
            );
        }
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
