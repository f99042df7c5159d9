//! Signed Tokens
//!
//! Tokens have the form `<payload>.<signature>` where the signature is
//! HMAC-SHA256 over the payload, Base64url without padding.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a random 32-byte secret
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    rand::rng().fill_bytes(&mut secret);
    secret
}

fn mac(secret: &[u8; 32]) -> HmacSha256 {
    <HmacSha256 as Mac>::new_from_slice(secret).expect("HMAC can take key of any size")
}

/// Sign `payload`, producing `<payload>.<signature>`
pub fn sign_token(secret: &[u8; 32], payload: &str) -> String {
    let mut mac = mac(secret);
    mac.update(payload.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    format!("{}.{}", payload, signature)
}

/// Verify a token and return its payload.
///
/// Returns `None` for malformed tokens and for signature mismatches.
/// Comparison is constant-time.
pub fn verify_token<'a>(secret: &[u8; 32], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.rsplit_once('.')?;
    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

    let mut mac = mac(secret);
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret() {
        let secret = random_secret();
        assert!(secret.iter().any(|&b| b != 0));
        assert_ne!(secret, random_secret());
    }

    #[test]
    fn test_signed_token_verifies() {
        let secret = [7u8; 32];
        let token = sign_token(&secret, "5f0c8a34-0d6b-4c1e-9a57-3f1b2b9e0c11");

        assert_eq!(
            verify_token(&secret, &token),
            Some("5f0c8a34-0d6b-4c1e-9a57-3f1b2b9e0c11")
        );
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = sign_token(&[7u8; 32], "payload");
        assert_eq!(verify_token(&[8u8; 32], &token), None);
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let secret = [7u8; 32];
        let token = sign_token(&secret, "payload");
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("other.{}", signature);

        assert_eq!(verify_token(&secret, &forged), None);
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let secret = [7u8; 32];
        assert_eq!(verify_token(&secret, "no-separator"), None);
        assert_eq!(verify_token(&secret, "payload.!!notbase64!!"), None);
    }
}
