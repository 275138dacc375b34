//! Property route definitions

use axum::{routing::get, Router};

use crate::handlers::properties::{get_property, list_properties, properties_page, property_page};
use crate::state::AppState;

pub fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(properties_page))
        .route("/properties/:id", get(property_page))
        .route("/api/properties", get(list_properties))
        .route("/api/properties/:id", get(get_property))
}
