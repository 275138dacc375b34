//! User profile handlers for the passthrough API

use axum::{extract::State, Json};

use crate::client::Identity;
use crate::error::ApiResult;
use crate::models::{ProfileUpdate, UserProfile};
use crate::state::AppState;

/// `GET /api/users/me`
pub async fn my_profile(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.client.my_profile(&identity).await?;
    Ok(Json(profile))
}

/// `PUT /api/users/me`
///
/// The body deserializes into the presence-tracked update structure, so an
/// omitted field, an explicit null, and an empty string survive the relay
/// unchanged.
pub async fn update_profile(
    State(state): State<AppState>,
    identity: Identity,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.client.update_profile(&identity, &update).await?;
    Ok(Json(profile))
}
