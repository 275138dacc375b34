//! Review route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::reviews::{create_review, property_reviews};
use crate::state::AppState;

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/api/reviews/property/:id", get(property_reviews))
        .route("/api/reviews", post(create_review))
}
