//! Data URI helpers.
//!
//! Media crosses the gateway boundary as `data:<mime>;base64,<payload>`
//! strings. Malformed URIs are validation errors, not gateway errors.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::AppError;

/// Build a data URI from a MIME type and raw bytes.
pub fn build(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a data URI into its MIME type and still-encoded base64
/// payload. The payload is checked to be valid base64 but not decoded.
pub fn parse(uri: &str) -> Result<(String, String), AppError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| malformed("missing data: prefix"))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| malformed("missing ;base64, separator"))?;
    if mime.is_empty() {
        return Err(malformed("missing MIME type"));
    }
    STANDARD
        .decode(payload)
        .map_err(|_| malformed("payload is not valid base64"))?;
    Ok((mime.to_string(), payload.to_string()))
}

fn malformed(reason: &str) -> AppError {
    AppError::Validation(format!("Malformed data URI: {}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_round_trips_through_parse() {
        let uri = build("text/plain", b"hello");
        let (mime, payload) = parse(&uri).unwrap();
        assert_eq!(mime, "text/plain");
        assert_eq!(payload, "aGVsbG8=");
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(parse("text/plain;base64,aGVsbG8=").is_err());
    }

    #[test]
    fn test_parse_rejects_non_base64_uri() {
        assert!(parse("data:text/plain,hello").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_payload() {
        assert!(parse("data:text/plain;base64,!!!").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_mime() {
        assert!(parse("data:;base64,aGVsbG8=").is_err());
    }
}
