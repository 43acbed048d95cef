use chrono::{SecondsFormat, Utc};

/// Wall-clock creation timestamp in RFC 3339 UTC with second precision
/// (e.g. `2024-01-01T00:00:00Z`)
pub fn creation_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
