use chrono::{DateTime, Utc};
use time::OffsetDateTime;

/// ClickHouse `DateTime` columns hold whole seconds.
pub fn to_offset_datetime(ts: DateTime<Utc>) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(ts.timestamp()).unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Hides the credentials part of a connection url before it is logged.
pub fn redact_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => match rest.rsplit_once('@') {
            Some((_, host)) => format!("{}://***@{}", scheme, host),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}
