//! Router tests
//!
//! Drive the full application router (routes, error layer, CORS) in-process.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use marquee_api_http::error::ErrorBody;
use marquee_api_http::server::app;
use marquee_api_http::{ImdbService, Services};
use marquee_core::application::{create_service_methods, imdb};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

fn router() -> Router {
    let imdb = ImdbService::new(create_service_methods(imdb::handlers())).unwrap();
    app(Services { imdb })
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_known_movie() {
    let response = router().oneshot(get("/movies/goodwill-hunting")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": "goodwill-hunting", "title": "Goodwill Hunting", "rating": 4.9})
    );
}

#[tokio::test]
async fn test_get_unknown_movie_is_not_found() {
    let response = router().oneshot(get("/movies/the-matrix")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(body.error_name, "MovieDoesNotExistError");
    assert!(body.message.contains("the-matrix"));
}

#[tokio::test]
async fn test_create_movie() {
    let response = router()
        .oneshot(post_json(
            "/movies/create-movie",
            json!({"title": "The Matrix", "rating": 4.8, "externalId": "x1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": "the-matrix", "title": "The Matrix", "rating": 4.8})
    );
}

#[tokio::test]
async fn test_create_then_get_still_not_found() {
    // Created movies are not stored; this is the expected behavior
    let app = router();

    let created = app
        .clone()
        .oneshot(post_json(
            "/movies/create-movie",
            json!({"title": "The Matrix", "rating": 4.8, "externalId": "x1"}),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let fetched = app.oneshot(get("/movies/the-matrix")).await.unwrap();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_invalid_body_is_bad_request() {
    let response = router()
        .oneshot(post_json("/movies/create-movie", json!({"title": "No Rating"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(body.error_name, "InvalidArgumentError");
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/movies/create-movie")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/movies/goodwill-hunting")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/movies/create-movie")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = router().oneshot(get("/shows/lost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
