//! Route definitions for the Nyumba web gateway

mod properties;
mod reviews;
mod users;

use axum::{
    response::Redirect,
    routing::get,
    Router,
};

pub use properties::property_routes;
pub use reviews::review_routes;
pub use users::user_routes;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Assemble the full application router, including the middleware layers the
/// integration tests exercise. Deployment-specific layers (CORS, HSTS) are
/// added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/properties") }))
        .route("/health", get(handlers::health_check))
        .merge(property_routes())
        .merge(review_routes())
        .merge(user_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
}
