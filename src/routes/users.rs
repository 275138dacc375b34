//! User route definitions

use axum::{routing::get, Router};

use crate::handlers::users::{my_profile, update_profile};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/users/me", get(my_profile).put(update_profile))
}
