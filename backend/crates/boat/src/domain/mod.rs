//! Domain Layer
//!
//! Session and profile entities plus the repository traits that load them.

pub mod profile;
pub mod repository;
pub mod session;

pub use profile::Profile;
pub use repository::{ProfileRepository, SessionRepository};
pub use session::Session;
