//! DTOs for short link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;
use crate::utils::url_validation::validate_http_url;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortLinkRequest {
    /// The original URL to shorten (must be a valid HTTP/HTTPS URL).
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    #[validate(custom(function = "validate_http_url"))]
    pub original_url: String,
}

/// Standard envelope for successful responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A success envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// A success envelope without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: None,
        }
    }
}

/// JSON representation of a stored short link.
#[derive(Debug, Serialize)]
pub struct ShortLinkData {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLinkData {
    /// Builds the response view of `link`, given its public short URL.
    pub fn from_link(link: ShortLink, short_url: String) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_https_url() {
        let request = CreateShortLinkRequest {
            original_url: "https://example.com/path".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_empty_url() {
        let request = CreateShortLinkRequest {
            original_url: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("original_url"));
    }

    #[test]
    fn test_request_rejects_non_http_url() {
        let request = CreateShortLinkRequest {
            original_url: "ftp://example.com/file".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_message_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::message("done")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "done");
        assert!(json.get("data").is_none());
    }
}
