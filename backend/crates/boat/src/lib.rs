//! Boat Request Context
//!
//! Clean Architecture structure:
//! - `domain/` - Session and profile entities, repository traits
//! - `application/` - Profile service, session provider, view defaults, config
//! - `infra/` - PostgreSQL repositories
//! - `presentation/` - Request context, middleware, handlers, router
//!
//! ## Request flow
//! 1. `decorate` resolves the session from the `Boat` cookie
//! 2. A [`BoatContext`] is attached to the request
//! 3. Handlers extract it and use `ensure_logged_in`,
//!    `redirect_if_logged_in` and `return_view`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BoatConfig, CookieSessionProvider, ProfileService, SessionProvider, ViewData, ViewEngine,
};
pub use domain::{Profile, Session};
pub use error::{BoatError, BoatResult};
pub use infra::{PgProfileRepository, PgSessionRepository};
pub use presentation::{BoatContext, boat_router, boat_router_generic};

pub use kernel::error::{app_error::AppError, kind::ErrorKind};
