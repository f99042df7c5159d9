//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain meaning:
//! - Cookie parsing and expiry headers
//! - Signed session tokens (HMAC-SHA256, Base64url)

pub mod cookie;
pub mod crypto;
