//! `data:` URI encoding of binary payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Errors produced while parsing a data URI.
#[derive(Debug, Error)]
pub enum DataUriError {
    #[error("Not a data URI")]
    MissingScheme,

    #[error("Data URI has no payload separator")]
    MissingPayload,

    #[error("Only base64 data URIs are supported")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Build a base64 data URI such as `data:image/jpeg;base64,/9j/...`.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Split a base64 data URI into its MIME type and decoded payload.
pub fn parse_data_uri(uri: &str) -> Result<(String, Vec<u8>), DataUriError> {
    let rest = uri.strip_prefix("data:").ok_or(DataUriError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or(DataUriError::NotBase64)?;

    let bytes = STANDARD.decode(payload)?;
    Ok((mime_type.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_uri_format() {
        let uri = to_data_uri("image/jpeg", &[0xFF, 0xD8, 0xFF]);
        assert_eq!(uri, "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_parse_recovers_payload() {
        let (mime, bytes) = parse_data_uri("data:image/jpeg;base64,/9j/").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(matches!(
            parse_data_uri("https://example.com/a.jpg"),
            Err(DataUriError::MissingScheme)
        ));
    }

    #[test]
    fn test_parse_rejects_non_base64() {
        assert!(matches!(
            parse_data_uri("data:text/plain,hello"),
            Err(DataUriError::NotBase64)
        ));
        assert!(matches!(
            parse_data_uri("data:image/jpeg;base64"),
            Err(DataUriError::MissingPayload)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_payload() {
        assert!(matches!(
            parse_data_uri("data:image/jpeg;base64,@@@"),
            Err(DataUriError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_empty_payload() {
        let uri = to_data_uri("image/jpeg", &[]);
        let (_, bytes) = parse_data_uri(&uri).unwrap();
        assert!(bytes.is_empty());
    }
}
