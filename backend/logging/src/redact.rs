//! Log Redaction Layer
//!
//! Scrubs API keys, bearer tokens, and credential query parameters from
//! strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(sk-[a-zA-Z0-9]{16,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)").unwrap());
static QUERY_SECRET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)([?&](?:api_?key|key|token|access_token)=)[^&#\s]+").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = API_KEY_RE.replace_all(input, "[REDACTED_TOKEN]");
    QUERY_SECRET_RE
        .replace_all(&redacted, "${1}[REDACTED]")
        .into_owned()
}
