//! Auth HTTP route handlers.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    api::{
        error::ApiError,
        types::{LoginData, LoginRequest},
    },
    auth::token::unix_now,
    state::AppState,
};

/// `POST /auth/login`.
pub(crate) async fn login_handler(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginData>, ApiError> {
    let Json(req) = body?;
    state.login(&req, unix_now()).await.map(Json)
}
