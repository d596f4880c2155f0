//! Static bearer-token gate for protected resource groups.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use worklog_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Marker extractor enforcing the bearer-token gate.
///
/// Use this as a parameter in any handler mounted under a protected
/// resource group; the request is rejected with 401 before the handler
/// body runs:
///
/// ```ignore
/// async fn list(_token: AuthToken, State(state): State<AppState>) -> AppResult<...> { ... }
/// ```
///
/// Token issuance is an external collaborator -- this gate only compares
/// the `Authorization` header against the configured `API_TOKEN`. When no
/// token is configured the gate is disabled.
#[derive(Debug, Clone, Copy)]
pub struct AuthToken;

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.api_token.as_deref() else {
            return Ok(AuthToken);
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

        if token != expected {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid token".into(),
            )));
        }

        Ok(AuthToken)
    }
}
