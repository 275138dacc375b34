//! Property listing handlers: HTML pages and the passthrough API

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use crate::client::{ClientError, ListingSource};
use crate::error::ApiResult;
use crate::listings::{view, FetchState, ListingFeed};
use crate::models::Listing;
use crate::search::{codec, SearchForm};
use crate::state::AppState;

/// `GET /properties`: the listings page.
///
/// The query string drives the fetch; the form itself starts blank rather
/// than mirroring the applied filters (`SearchForm::from_query` exists for
/// callers that want pre-seeding).
pub async fn properties_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let query = query.unwrap_or_default();

    let feed = ListingFeed::new(state.client.clone() as Arc<dyn ListingSource>);
    let listings = feed.observe(&query).await;

    let form = SearchForm::new();
    Html(view::properties_page(&form, &listings))
}

/// `GET /properties/:id`: the property detail page with its reviews.
pub async fn property_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let listing = match state.client.get_property(id).await {
        Ok(listing) => listing,
        Err(ClientError::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Html(view::error_page("Property not found")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, property_id = id, "property fetch failed");
            return (
                StatusCode::BAD_GATEWAY,
                Html(view::error_page(err.user_message())),
            )
                .into_response();
        }
    };

    // A failed reviews fetch degrades to an inline notice; the listing itself
    // still renders.
    let reviews = match state.client.property_reviews(id).await {
        Ok(reviews) => FetchState::Ready(reviews),
        Err(err) => {
            tracing::warn!(error = %err, property_id = id, "reviews fetch failed");
            FetchState::Failed(err.user_message().to_string())
        }
    };

    Html(view::property_detail_page(&listing, &reviews)).into_response()
}

/// `GET /api/properties`: forward the filter query to the backend and relay
/// the matching listings.
pub async fn list_properties(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Listing>>> {
    let filter = codec::decode(query.as_deref().unwrap_or(""));
    let listings = state.client.search_properties(&filter).await?;
    Ok(Json(listings))
}

/// `GET /api/properties/:id`: relay a single listing or a not-found.
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Listing>> {
    let listing = state.client.get_property(id).await?;
    Ok(Json(listing))
}
