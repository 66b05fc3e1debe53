//! Bearer-token guard for the content-management API.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portfolio_core::error::CoreError;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured `ADMIN_TOKEN`.
///
/// Use this as an extractor parameter in every management handler:
///
/// ```ignore
/// async fn list(_admin: RequireAdmin, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// When no token is configured every request is rejected.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Content management is disabled".into(),
            )));
        };

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !tokens_match(token, expected) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid token".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}

/// Compare tokens in constant time.
///
/// Both sides are hashed first so the comparison length does not depend on
/// the configured token.
fn tokens_match(given: &str, expected: &str) -> bool {
    let given = Sha256::digest(given.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    given.as_slice().ct_eq(expected.as_slice()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_tokens_match() {
        assert!(tokens_match("s3cret-token", "s3cret-token"));
    }

    #[test]
    fn test_different_tokens_do_not_match() {
        assert!(!tokens_match("s3cret-tokem", "s3cret-token"));
    }

    #[test]
    fn test_prefix_and_empty_tokens_do_not_match() {
        assert!(!tokens_match("s3cret", "s3cret-token"));
        assert!(!tokens_match("s3cret-token-extra", "s3cret-token"));
        assert!(!tokens_match("", "s3cret-token"));
    }
}
