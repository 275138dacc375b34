//! HTTP client for the remote listings backend
//!
//! One shared `reqwest::Client` wrapped in typed accessors per backend
//! endpoint. The search seam is the `ListingSource` trait so the fetch
//! controller can be driven by a scripted source in tests.

use std::time::Duration;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use reqwest::StatusCode;
use thiserror::Error;

use crate::error::ApiError;
use crate::models::{Listing, NewReview, ProfileUpdate, Review, UserProfile};
use crate::search::{codec, PropertyFilter};

/// Errors from backend round trips
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("resource not found")]
    NotFound,
}

impl ClientError {
    /// Short, user-displayable summary; never the raw error chain.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "Could not reach the listings service.",
            ClientError::UpstreamStatus(_) => "The listings service returned an error.",
            ClientError::NotFound => "Not found.",
        }
    }
}

/// Source of listings for the fetch controller
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<Listing>, ClientError>;
}

/// Bearer credential of the current user.
///
/// Passed explicitly to the operations that need it (profile, review
/// submission) and relayed verbatim to the backend; the gateway never
/// validates tokens itself, and there is no ambient session state.
#[derive(Debug, Clone)]
pub struct Identity {
    token: String,
}

impl Identity {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthorized(
                        "Authorization header with Bearer token required".to_string(),
                    )
                })?;

        Ok(Identity::new(bearer.token()))
    }
}

/// Typed client for the listings backend REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map the response status before reading the body: 404 is surfaced as a
    /// distinct not-found condition, any other non-success as a generic
    /// upstream failure.
    fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status => Err(ClientError::UpstreamStatus(status)),
        }
    }

    /// `GET /properties?<filter>`
    pub async fn search_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<Listing>, ClientError> {
        let query = codec::encode(filter);
        let mut url = self.url("/properties");
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let response = self.http.get(url).send().await?;
        Ok(Self::expect_success(response)?.json().await?)
    }

    /// `GET /properties/{id}`
    pub async fn get_property(&self, id: i64) -> Result<Listing, ClientError> {
        let response = self.http.get(self.url(&format!("/properties/{id}"))).send().await?;
        Ok(Self::expect_success(response)?.json().await?)
    }

    /// `GET /reviews/property/{id}`
    pub async fn property_reviews(&self, property_id: i64) -> Result<Vec<Review>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/reviews/property/{property_id}")))
            .send()
            .await?;
        Ok(Self::expect_success(response)?.json().await?)
    }

    /// `POST /reviews`
    pub async fn create_review(
        &self,
        identity: &Identity,
        review: &NewReview,
    ) -> Result<Review, ClientError> {
        let response = self
            .http
            .post(self.url("/reviews"))
            .bearer_auth(identity.token())
            .json(review)
            .send()
            .await?;
        Ok(Self::expect_success(response)?.json().await?)
    }

    /// `GET /users/me`
    pub async fn my_profile(&self, identity: &Identity) -> Result<UserProfile, ClientError> {
        let response = self
            .http
            .get(self.url("/users/me"))
            .bearer_auth(identity.token())
            .send()
            .await?;
        Ok(Self::expect_success(response)?.json().await?)
    }

    /// `PUT /users/me`
    ///
    /// The update serializes with per-field presence preserved: untouched
    /// fields stay off the wire, explicit clears go out as null.
    pub async fn update_profile(
        &self,
        identity: &Identity,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ClientError> {
        let response = self
            .http
            .put(self.url("/users/me"))
            .bearer_auth(identity.token())
            .json(update)
            .send()
            .await?;
        Ok(Self::expect_success(response)?.json().await?)
    }

    /// Reachability probe for the health endpoint
    pub async fn probe(&self) -> bool {
        match self.http.get(self.url("/")).send().await {
            Ok(response) => !response.status().is_server_error(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl ListingSource for ApiClient {
    async fn search(&self, filter: &PropertyFilter) -> Result<Vec<Listing>, ClientError> {
        self.search_properties(filter).await
    }
}
