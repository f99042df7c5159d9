//! Presentation Layer
//!
//! Request context, middleware, handlers and router.

pub mod context;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use context::BoatContext;
pub use middleware::{ContextDecorator, decorate};
pub use router::{boat_router, boat_router_generic};
