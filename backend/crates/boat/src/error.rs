//! Boat Error Types
//!
//! Request-context errors. Every variant maps to an HTTP status and renders
//! through the unified `kernel::error::AppError` body, except the redirect
//! signal, which renders as `303 See Other`.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type BoatResult<T> = Result<T, BoatError>;

#[derive(Debug, Error)]
pub enum BoatError {
    /// Session cookie present but its signature does not verify.
    /// Carries the cookie name so the response can clear it.
    #[error("Session cookie is invalid")]
    SessionInvalid(String),

    #[error("You must be logged in")]
    Unauthorized,

    /// Not a failure: stops the handler and redirects to the given path
    #[error("See other: {0}")]
    SeeOther(String),

    /// No profile stored yet
    #[error("Profile not found")]
    ProfileNotFound,

    /// Profile lookup failed while rendering a view
    #[error("couldn't get profile")]
    ProfileUnavailable,

    #[error("Error reading manifest")]
    ManifestUnavailable,

    #[error("couldn't render view")]
    RenderFailed(String),

    /// Handler asked for the context but the decorator is not installed
    #[error("Request context is not initialized")]
    ContextMissing,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BoatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoatError::SessionInvalid(_) => StatusCode::BAD_REQUEST,
            BoatError::Unauthorized => StatusCode::UNAUTHORIZED,
            BoatError::SeeOther(_) => StatusCode::SEE_OTHER,
            BoatError::ProfileNotFound => StatusCode::NOT_FOUND,
            BoatError::ProfileUnavailable
            | BoatError::ManifestUnavailable
            | BoatError::RenderFailed(_)
            | BoatError::ContextMissing
            | BoatError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `None` for the redirect signal, which is not an error response
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            BoatError::SeeOther(_) => return None,
            BoatError::SessionInvalid(_) => ErrorKind::BadRequest,
            BoatError::Unauthorized => ErrorKind::Unauthorized,
            BoatError::ProfileNotFound => ErrorKind::NotFound,
            BoatError::ProfileUnavailable
            | BoatError::ManifestUnavailable
            | BoatError::RenderFailed(_)
            | BoatError::ContextMissing
            | BoatError::Database(_) => ErrorKind::InternalServerError,
        };
        Some(kind)
    }

    fn log(&self) {
        match self {
            BoatError::Database(e) => {
                tracing::error!(error = %e, "Boat database error");
            }
            BoatError::RenderFailed(detail) => {
                tracing::error!(detail = %detail, "View render failed");
            }
            BoatError::ContextMissing => {
                tracing::error!("Handler used BoatContext without the context middleware");
            }
            BoatError::SessionInvalid(cookie) => {
                tracing::warn!(cookie = %cookie, "Rejected session cookie with bad signature");
            }
            BoatError::SeeOther(path) => {
                tracing::debug!(location = %path, "Redirecting");
            }
            _ => {
                tracing::debug!(error = %self, "Boat error");
            }
        }
    }
}

impl IntoResponse for BoatError {
    fn into_response(self) -> Response {
        self.log();

        // Drop the bad cookie so the next request starts clean
        let clear_cookie = match &self {
            BoatError::SeeOther(path) => return Redirect::to(path).into_response(),
            BoatError::SessionInvalid(cookie) => {
                Some(platform::cookie::build_delete_cookie(cookie, "/"))
            }
            _ => None,
        };

        let mut response = AppError::from(self).into_response();

        if let Some(value) = clear_cookie.and_then(|clear| clear.parse::<HeaderValue>().ok()) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }

        response
    }
}

/// Only the display message goes out. A database error keeps its cause as
/// the `AppError` source so it never reaches the response body.
impl From<BoatError> for AppError {
    fn from(err: BoatError) -> Self {
        match err {
            BoatError::Database(e) => AppError::internal("Internal server error").with_source(e),
            other => {
                let kind = other.kind().unwrap_or(ErrorKind::InternalServerError);
                AppError::new(kind, other.to_string())
            }
        }
    }
}

impl From<minijinja::Error> for BoatError {
    fn from(err: minijinja::Error) -> Self {
        BoatError::RenderFailed(format!("{:#}", err))
    }
}
