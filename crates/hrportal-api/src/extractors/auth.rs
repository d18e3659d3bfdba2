//! `AuthUser` extractor: the request context attached by `protect`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hrportal_core::error::AppError;
use hrportal_service::context::RequestContext;

use crate::error::ApiError;

/// Authenticated request context available in handlers.
///
/// Only resolves on routes behind the `protect` middleware.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthenticated("Access denied. Not authenticated.").into())
    }
}
