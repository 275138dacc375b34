//! Review handlers for the passthrough API

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::client::Identity;
use crate::error::ApiResult;
use crate::models::{NewReview, Review};
use crate::state::AppState;

/// `GET /api/reviews/property/:id`
pub async fn property_reviews(
    State(state): State<AppState>,
    Path(property_id): Path<i64>,
) -> ApiResult<Json<Vec<Review>>> {
    let reviews = state.client.property_reviews(property_id).await?;
    Ok(Json(reviews))
}

/// `POST /api/reviews`
///
/// Mirrors the browser-side constraint (a rating must be chosen before the
/// form submits) before forwarding; everything else is the backend's call.
pub async fn create_review(
    State(state): State<AppState>,
    identity: Identity,
    Json(review): Json<NewReview>,
) -> ApiResult<Json<Review>> {
    review.validate()?;
    let created = state.client.create_review(&identity, &review).await?;
    Ok(Json(created))
}
