//! Bearer authentication for protected routes.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{api::error::ApiError, auth::token::unix_now, state::AppState};

/// Verify the bearer token and attach the caller's `Identity` to the request.
pub(crate) async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;
    let identity = state
        .authenticate(token, unix_now())
        .await
        .inspect_err(|err| {
            if err.is_unauthorized() {
                debug!(code = err.code, "bearer token rejected");
            }
        })?;

    debug!(
        subject = %identity.subject,
        expires_at = identity.expires_at,
        "bearer token accepted"
    );
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;
    let header = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Authorization header is not valid text"))?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use the Bearer scheme"))?
        .trim();
    if token.is_empty() {
        return Err(ApiError::unauthorized("bearer token is empty"));
    }
    Ok(token)
}
