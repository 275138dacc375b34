//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::client::ApiClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ApiClient>,
}

impl AppState {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl FromRef<AppState> for Arc<ApiClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.client.clone()
    }
}
