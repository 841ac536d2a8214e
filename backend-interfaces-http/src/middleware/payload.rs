use std::borrow::Cow;
use std::io::Read;

use axum::http::{header, HeaderMap};
use flate2::read::GzDecoder;
use serde_json::Value;
use tracing::warn;

use backend_application::Metrics;
use backend_domain::{FromPayload, ValidationError};

use crate::error::HttpError;

/// Decodes and validates a request body, counting rejects.
///
/// `limit` bounds the body after gzip inflation; the transport limit only
/// sees the compressed size.
pub fn parse_payload<T: FromPayload>(
    metrics: &Metrics,
    headers: &HeaderMap,
    body: &[u8],
    limit: u64,
) -> Result<T, HttpError> {
    decode_json(headers, body, limit)
        .and_then(|value| T::from_payload(&value))
        .map_err(|err| {
            metrics.record_rejected();
            warn!("rejected request body: {}", err);
            HttpError::Validation(err)
        })
}

pub fn decode_json(headers: &HeaderMap, body: &[u8], limit: u64) -> Result<Value, ValidationError> {
    let content = maybe_gunzip(headers, body, limit)?;
    serde_json::from_slice(&content)
        .map_err(|err| ValidationError::single("body", format!("invalid JSON: {}", err)))
}

fn maybe_gunzip<'a>(
    headers: &HeaderMap,
    body: &'a [u8],
    limit: u64,
) -> Result<Cow<'a, [u8]>, ValidationError> {
    let gzipped = headers
        .get(header::CONTENT_ENCODING)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().eq_ignore_ascii_case("gzip"))
        .unwrap_or(false);
    if !gzipped {
        return Ok(Cow::Borrowed(body));
    }
    let mut decoder = GzDecoder::new(body).take(limit.saturating_add(1));
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|err| ValidationError::single("body", format!("unreadable gzip body: {}", err)))?;
    if out.len() as u64 > limit {
        return Err(ValidationError::single(
            "body",
            format!("decompressed body exceeds {} bytes", limit),
        ));
    }
    Ok(Cow::Owned(out))
}
