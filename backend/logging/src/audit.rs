//! Request Audit Logger
//!
//! Structured events for rejected analyze requests, emitted through `tracing`
//! under the `request_audit` target so they land in the NDJSON log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum AuditEvent {
    /// The request did not look like it came from a web page.
    NonWebRequest {
        origin: Option<String>,
        referer: Option<String>,
        user_agent: Option<String>,
    },
    /// The declared origin is not on the trust list.
    UntrustedOrigin { origin: String },
    /// CORS preflight, which is never supported.
    Preflight { origin: Option<String> },
}

#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub event: AuditEvent,
}

/// Builds the audit record for a rejected request, redacting header values.
pub fn audit_entry(request_id: &str, mut event: AuditEvent) -> AuditEntry {
    let scrub = |v: &mut Option<String>| {
        if let Some(s) = v.as_mut() {
            *s = redact_sensitive_data(s);
        }
    };
    match &mut event {
        AuditEvent::NonWebRequest { origin, referer, user_agent } => {
            scrub(origin);
            scrub(referer);
            scrub(user_agent);
        }
        AuditEvent::UntrustedOrigin { origin } => {
            *origin = redact_sensitive_data(origin);
        }
        AuditEvent::Preflight { origin } => scrub(origin),
    }

    AuditEntry {
        request_id: request_id.into(),
        timestamp: Utc::now(),
        event,
    }
}

pub struct AuditLogger;

impl AuditLogger {
    /// Logs a rejected request under the `request_audit` target.
    pub fn log_rejection(request_id: &str, event: AuditEvent) {
        let entry = audit_entry(request_id, event);
        warn!(target: "request_audit", entry = ?entry, "Rejected request");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = AuditEvent::UntrustedOrigin {
            origin: "https://evil.example".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "UntrustedOrigin");
        assert_eq!(json["origin"], "https://evil.example");
    }

    #[test]
    fn non_web_entry_carries_redacted_headers() {
        let entry = audit_entry(
            "req-1",
            AuditEvent::NonWebRequest {
                origin: Some("null".into()),
                referer: Some("https://x.example/?token=secret".into()),
                user_agent: Some("curl/8.0".into()),
            },
        );
        assert_eq!(entry.request_id, "req-1");

        let json = serde_json::to_value(&entry).unwrap();
        let event = &json["event"];
        assert_eq!(event["type"], "NonWebRequest");
        assert_eq!(event["origin"], "null");
        assert_eq!(event["referer"], "https://x.example/?token=[REDACTED]");
        assert_eq!(event["user_agent"], "curl/8.0");
    }

    #[test]
    fn untrusted_origin_is_redacted() {
        let entry = audit_entry(
            "req-2",
            AuditEvent::UntrustedOrigin {
                origin: "https://evil.example?key=abc123".into(),
            },
        );
        match entry.event {
            AuditEvent::UntrustedOrigin { origin } => {
                assert_eq!(origin, "https://evil.example?key=[REDACTED]");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
