use axum::http::HeaderMap;
use url::form_urlencoded;

use crate::signature::VerificationInput;

pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// The parts of an inbound slash command the bot cares about. Anything missing stays
/// `None` so verification can fail closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashRequest {
    pub timestamp: Option<String>,
    pub signature: Option<String>,
    pub body: Option<String>,
}

impl SlashRequest {
    pub fn from_parts(headers: &HeaderMap, body: String) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        Self {
            timestamp: header(TIMESTAMP_HEADER),
            signature: header(SIGNATURE_HEADER),
            body: Some(body).filter(|body| !body.is_empty()),
        }
    }

    pub fn verification_input(&self) -> Option<VerificationInput<'_>> {
        Some(VerificationInput {
            timestamp: self.timestamp.as_deref()?,
            raw_body: self.body.as_deref()?,
            provided_signature: self.signature.as_deref()?,
        })
    }

    /// The `text` form field, i.e. whatever followed the command, lowercased.
    pub fn argument(&self) -> Option<String> {
        let body = self.body.as_deref()?;
        form_urlencoded::parse(body.as_bytes())
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.trim().to_ascii_lowercase())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    #[test]
    fn test_from_parts() {
        let mut headers = HeaderMap::new();
        // header names arrive in whatever case the caller used
        headers.insert(
            HeaderName::from_bytes(b"X-Slack-Request-Timestamp").unwrap(),
            HeaderValue::from_static("1546849052"),
        );
        headers.insert(
            HeaderName::from_bytes(b"X-Slack-Signature").unwrap(),
            HeaderValue::from_static("v0=abc"),
        );
        let request = SlashRequest::from_parts(&headers, "text=sc".to_string());
        let input = request.verification_input().expect("all parts are present");
        assert_eq!(input.timestamp, "1546849052");
        assert_eq!(input.provided_signature, "v0=abc");
        assert_eq!(input.raw_body, "text=sc");
    }

    #[test]
    fn test_missing_parts_fail_closed() {
        let mut headers = HeaderMap::new();
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_static("1"));
        let no_signature = SlashRequest::from_parts(&headers, "text=sc".to_string());
        assert!(no_signature.verification_input().is_none());

        headers.insert(SIGNATURE_HEADER, HeaderValue::from_static("v0=abc"));
        let no_body = SlashRequest::from_parts(&headers, String::new());
        assert!(no_body.verification_input().is_none());
        assert!(SlashRequest::default().verification_input().is_none());
    }

    #[test]
    fn test_argument() {
        let body = |body: &str| SlashRequest {
            body: Some(body.to_string()),
            ..SlashRequest::default()
        };
        assert_eq!(
            body("token=abc&command=%2Flunch&text=sc&response_url=x").argument(),
            Some("sc".to_string())
        );
        assert_eq!(body("text=SC+").argument(), Some("sc".to_string()));
        assert_eq!(body("text=san%20jose").argument(), Some("san jose".to_string()));
        assert_eq!(body("command=%2Flunch&text=").argument(), None);
        assert_eq!(body("command=%2Flunch").argument(), None);
        assert_eq!(SlashRequest::default().argument(), None);
    }
}
