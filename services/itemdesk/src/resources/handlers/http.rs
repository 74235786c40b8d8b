//! Resource HTTP route handlers. Both routes sit behind `require_bearer`.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    api::{
        error::ApiError,
        types::{Identity, Item, Profile, ProfilePatch},
    },
    state::AppState,
};

/// `GET /items`.
pub(crate) async fn list_items_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Json<Vec<Item>> {
    Json(state.list_items(&identity).await)
}

/// `PUT /profile`.
pub(crate) async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    body: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let Json(patch) = body?;
    state.update_profile(&identity, &patch).await.map(Json)
}
