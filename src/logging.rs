//! Logging setup and redaction of sensitive values.

use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Placeholder written in place of redacted values.
pub const REDACTED: &str = "[REDACTED]";

/// Key fragments whose values never reach logs or terminal output.
const SENSITIVE_KEYS: &[&str] = &[
    "password", "token", "secret", "key", "auth", "email", "phone", "ssn", "credit",
];

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `folio=info` in verbose mode and
/// `folio=warn` by default.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "folio=info" } else { "folio=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Copy of `value` with every sensitive key's value replaced by [`REDACTED`].
///
/// Matching is case-insensitive on substrings, so `apiKey` and `AUTH_TOKEN`
/// are both caught. Objects nested inside arrays are walked too.
pub fn redact(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(redact).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = if is_sensitive(key) {
                        Value::String(REDACTED.to_string())
                    } else {
                        redact(value)
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn is_sensitive(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEYS.iter().any(|s| key.contains(s))
}
