use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant for the Calendar API `timeMin` parameter (RFC 3339, `Z` suffix)
pub fn time_min(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}
