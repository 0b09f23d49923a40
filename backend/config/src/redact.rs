//! Config redaction: produce safe-to-log config snapshots by masking secrets.

use serde_json::Value;

use crate::schema::AppConfig;

static SENSITIVE_KEYS: &[&str] = &[
    "aiApiKey",
    "apiKey",
    "api_key",
    "token",
    "secret",
    "password",
];

/// Serialize the config with every sensitive field masked.
pub fn redact(config: &AppConfig) -> Value {
    match serde_json::to_value(config) {
        Ok(value) => redact_value(&value),
        Err(_) => Value::Null,
    }
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn mask(s: &str) -> String {
    // Preserve a short hint so operators can tell keys apart
    if s.chars().count() > 4 {
        format!("{}***", s.chars().take(4).collect::<String>())
    } else {
        "***".to_string()
    }
}

fn redact_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                let redacted = match v {
                    Value::String(s) if is_sensitive_key(k) && !s.is_empty() => {
                        Value::String(mask(s))
                    }
                    other => redact_value(other),
                };
                result.insert(k.clone(), redacted);
            }
            Value::Object(result)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(redact_value).collect()),
        other => other.clone(),
    }
}
