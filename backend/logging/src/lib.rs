//! Telemetry and structured logging for geoforge.
//!
//! Handles log redaction, JSON file output with daily rotation, and request
//! audit events.

pub mod audit;
pub mod logger;
pub mod redact;

pub use audit::{AuditEntry, AuditEvent, AuditLogger, audit_entry};
pub use logger::init_logger;
pub use redact::redact_sensitive_data;
