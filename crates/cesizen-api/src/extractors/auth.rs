//! `CurrentUser` extractor — resolves the account behind the bearer token.
//!
//! The request gate has already verified the token and the policy by the
//! time a handler runs; this extractor re-decodes the claims and loads the
//! account row for handlers that need the caller's identity.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use cesizen_core::error::AppError;
use cesizen_entity::user::User;
use cesizen_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Pull the bearer token out of the Authorization header, if any.
///
/// A header carrying another scheme is treated as no bearer credential.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Extracted authenticated account available in handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The caller's account row, verified active.
    pub user: User,
    /// Request context derived from the token claims.
    pub context: RequestContext,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(AppError::credentials)?;
        let claims = state.jwt_decoder.verify(token)?;
        let user = state.auth_service.current_user(&claims.sub).await?;
        let context = RequestContext::from_claims(&claims, state.clock.now());

        Ok(Self { user, context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));

        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer_token(&headers), None);
    }
}
