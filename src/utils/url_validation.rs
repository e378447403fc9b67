//! HTTP(S) URL validation for incoming shorten requests.
//!
//! The shortening service only requires a non-blank URL; format checks happen
//! here, at the API boundary, before the service is called.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// The URL is not rewritten; callers store exactly what was submitted.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// such as `javascript:`, `data:` or `ftp:`.
/// Returns [`UrlValidationError::MissingHost`] when no host is present.
pub fn check_http_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// `validator` adapter for [`check_http_url`].
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    check_http_url(input).map_err(|e| {
        ValidationError::new("http_url").with_message(Cow::Owned(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(check_http_url("http://example.com").is_ok());
    }

    #[test]
    fn test_accepts_https_with_path_and_query() {
        assert!(check_http_url("https://example.com/path?q=rust&lang=en").is_ok());
    }

    #[test]
    fn test_accepts_ip_and_port() {
        assert!(check_http_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            check_http_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(matches!(
            check_http_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_ftp_protocol() {
        assert!(matches!(
            check_http_url("ftp://example.com/file.txt"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_rejects_javascript_protocol() {
        assert!(matches!(
            check_http_url("javascript:alert('xss')"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validator_adapter_sets_code() {
        let err = validate_http_url("mailto:test@example.com").unwrap_err();
        assert_eq!(err.code, "http_url");
        assert!(err.message.is_some());
    }
}
