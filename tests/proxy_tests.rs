//! Integration tests for the passthrough API routes and pages
//!
//! A stub backend listens on an ephemeral port; requests go through the real
//! router via `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, Request, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use nyumba_web::client::ApiClient;
use nyumba_web::routes;
use nyumba_web::state::AppState;

/// What the stub backend saw
#[derive(Clone, Default)]
struct Recorded {
    query: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
    auth: Arc<Mutex<Option<String>>>,
}

fn listing_json() -> Value {
    json!({
        "id": 7,
        "title": "Two-bedroom apartment in Kololo",
        "property_type": "apartment",
        "status": "available",
        "address": "Plot 14 Acacia Avenue",
        "city": "Kampala",
        "bedrooms": 2,
        "price": 1500000.0,
        "currency": "UGX",
        "is_furnished": true,
        "has_parking": false,
        "has_security": true,
        "has_water": true,
        "has_electricity": true,
        "images": [],
        "owner_id": 3,
        "created_at": "2024-05-01T12:00:00Z"
    })
}

fn review_json() -> Value {
    json!({
        "id": 21,
        "property_id": 7,
        "reviewer_id": 12,
        "reviewer_name": "Amina",
        "rating": 4.5,
        "comment": "Great landlord",
        "created_at": "2024-06-01T09:00:00Z"
    })
}

fn profile_json() -> Value {
    json!({
        "id": 12,
        "email": "amina@example.com",
        "full_name": "Amina Nakato",
        "phone_number": "+256700000000",
        "profile_picture": null,
        "bio": null,
        "user_type": "tenant",
        "is_verified": true,
        "created_at": "2023-11-02T08:00:00Z"
    })
}

async fn stub_list_properties(
    State(rec): State<Recorded>,
    RawQuery(query): RawQuery,
) -> Json<Value> {
    *rec.query.lock().unwrap() = Some(query.unwrap_or_default());
    Json(json!([listing_json()]))
}

async fn stub_get_property(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    if id == 7 {
        Ok(Json(listing_json()))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn stub_property_reviews() -> Json<Value> {
    Json(json!([review_json()]))
}

async fn stub_create_review(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    *rec.auth.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    *rec.body.lock().unwrap() = Some(body);
    Json(review_json())
}

async fn stub_update_profile(
    State(rec): State<Recorded>,
    Json(body): Json<Value>,
) -> Json<Value> {
    *rec.body.lock().unwrap() = Some(body);
    Json(profile_json())
}

fn stub_backend(rec: Recorded) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/properties", get(stub_list_properties))
        .route("/properties/:id", get(stub_get_property))
        .route("/reviews/property/:id", get(stub_property_reviews))
        .route("/reviews", post(stub_create_review))
        .route("/users/me", put(stub_update_profile))
        .with_state(rec)
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn gateway(backend_url: &str) -> Router {
    let client = Arc::new(ApiClient::new(backend_url, Duration::from_secs(2)).unwrap());
    routes::router(AppState::new(client))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_list_properties_forwards_filter_and_relays_body() {
    let rec = Recorded::default();
    let backend = spawn_backend(stub_backend(rec.clone())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/properties?property_type=house&bedrooms=2&bogus=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["title"], "Two-bedroom apartment in Kololo");

    // The recognized filters are forwarded; the unknown key is dropped.
    assert_eq!(
        rec.query.lock().unwrap().as_deref(),
        Some("property_type=house&bedrooms=2")
    );
}

#[tokio::test]
async fn test_get_property_relays_not_found() {
    let backend = spawn_backend(stub_backend(Recorded::default())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/properties/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upstream_error_becomes_generic_payload() {
    let failing = Router::new().route(
        "/properties",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let backend = spawn_backend(failing).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/properties")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    // Transport detail never leaks to the caller.
    let message = body["error"]["message"].as_str().unwrap();
    assert!(!message.contains("500"));
    assert!(!message.contains("boom"));
}

#[tokio::test]
async fn test_unreachable_backend_becomes_generic_payload() {
    // Bind then drop, so the port is very likely unoccupied.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = gateway(&format!("http://{addr}"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/properties")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_create_review_forwards_body_and_bearer() {
    let rec = Recorded::default();
    let backend = spawn_backend(stub_backend(rec.clone())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/reviews")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, "Bearer token123")
                .body(Body::from(
                    r#"{"property_id":7,"rating":4.5,"comment":"Great landlord"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 21);

    assert_eq!(rec.auth.lock().unwrap().as_deref(), Some("Bearer token123"));
    let forwarded = rec.body.lock().unwrap().clone().unwrap();
    assert_eq!(forwarded["property_id"], 7);
    assert_eq!(forwarded["rating"], 4.5);
    assert_eq!(forwarded["comment"], "Great landlord");
}

#[tokio::test]
async fn test_create_review_rejects_out_of_range_rating() {
    let rec = Recorded::default();
    let backend = spawn_backend(stub_backend(rec.clone())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/reviews")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, "Bearer token123")
                .body(Body::from(r#"{"property_id":7,"rating":9.0,"comment":"x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    // Never forwarded upstream.
    assert!(rec.body.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_review_submission_requires_identity() {
    let backend = spawn_backend(stub_backend(Recorded::default())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/reviews")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"property_id":7,"rating":4.0,"comment":"x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_preserves_null_versus_absent() {
    let rec = Recorded::default();
    let backend = spawn_backend(stub_backend(rec.clone())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/users/me")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, "Bearer token123")
                .body(Body::from(r#"{"bio":null}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Exactly the one field arrives upstream: bio as an explicit null, with
    // the untouched fields absent rather than nulled out.
    let forwarded = rec.body.lock().unwrap().clone().unwrap();
    assert_eq!(forwarded, json!({ "bio": null }));
}

#[tokio::test]
async fn test_properties_page_renders_listings() {
    let rec = Recorded::default();
    let backend = spawn_backend(stub_backend(rec.clone())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/properties?city=Kampala")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    let html = body_text(response).await;
    assert!(html.contains("Two-bedroom apartment in Kololo"));
    assert!(html.contains("UGX 1,500,000"));
    assert_eq!(rec.query.lock().unwrap().as_deref(), Some("city=Kampala"));
}

#[tokio::test]
async fn test_properties_page_shows_error_in_place_of_content() {
    let failing = Router::new().route(
        "/properties",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let backend = spawn_backend(failing).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/properties")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("The listings service returned an error."));
    assert!(!html.contains("boom"));
}

#[tokio::test]
async fn test_property_detail_page_with_reviews() {
    let backend = spawn_backend(stub_backend(Recorded::default())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/properties/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Two-bedroom apartment in Kololo"));
    assert!(html.contains("Great landlord"));
}

#[tokio::test]
async fn test_unknown_property_page_is_not_found() {
    let backend = spawn_backend(stub_backend(Recorded::default())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/properties/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Property not found"));
}

#[tokio::test]
async fn test_health_reports_backend_reachability() {
    let backend = spawn_backend(stub_backend(Recorded::default())).await;
    let app = gateway(&backend);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "reachable");
}
