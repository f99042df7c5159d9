//! Application Layer
//!
//! Services the request context is built from.

pub mod config;
pub mod profile_service;
pub mod session_provider;
pub mod view;

// Re-exports
pub use config::BoatConfig;
pub use profile_service::ProfileService;
pub use session_provider::{CookieSessionProvider, SessionProvider};
pub use view::{ViewData, ViewDefaults, ViewEngine, with_defaults};
