//! Verification of the `X-Slack-Signature` header.
//!
//! The caller signs `v0:{timestamp}:{raw body}` with HMAC-SHA256 keyed by the shared
//! signing secret and sends `v0=` followed by the lowercase hex digest.
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

const VERSION: &str = "v0";

type HmacSha256 = Hmac<Sha256>;

/// Everything needed to check one inbound request. Borrowed straight from the request.
#[derive(Debug, Clone, Copy)]
pub struct VerificationInput<'a> {
    pub timestamp: &'a str,
    pub raw_body: &'a str,
    pub provided_signature: &'a str,
}

#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Vec<u8>,
}

impl SignatureVerifier {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Computes the signature the trusted caller would have sent for this timestamp and body.
    pub fn sign(&self, timestamp: &str, raw_body: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("hmac should accept keys of any length");
        mac.update(VERSION.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(raw_body.as_bytes());
        format!("{VERSION}={}", hex::encode(mac.finalize().into_bytes()))
    }

    pub fn verify(&self, input: &VerificationInput<'_>) -> bool {
        let expected = self.sign(input.timestamp, input.raw_body);
        expected
            .as_bytes()
            .ct_eq(input.provided_signature.as_bytes())
            .into()
    }
}
