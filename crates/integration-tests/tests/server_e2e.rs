//! End-to-end tests: real server on an ephemeral port, driven over HTTP.

use marquee_api_http::{HttpServer, HttpServerConfig, ImdbService, ServerHandle, Services};
use marquee_core::application::{create_service_methods, imdb};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn start_server() -> (ServerHandle, String) {
    let imdb = ImdbService::new(create_service_methods(imdb::handlers())).unwrap();
    let config = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let handle = HttpServer::new(config, Services { imdb })
        .start()
        .await
        .unwrap();
    let base = format!("http://{}", handle.local_addr());
    (handle, base)
}

#[tokio::test]
async fn test_movie_scenarios() {
    let (handle, base) = start_server().await;
    let client = reqwest::Client::new();

    // Scenario 1: the built-in movie
    let response = client
        .get(format!("{base}/movies/goodwill-hunting"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"id": "goodwill-hunting", "title": "Goodwill Hunting", "rating": 4.9})
    );

    // Scenario 2: unknown movie
    let response = client
        .get(format!("{base}/movies/the-matrix"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errorName"], "MovieDoesNotExistError");

    // Scenario 3: create answers with the derived record...
    let response = client
        .post(format!("{base}/movies/create-movie"))
        .json(&json!({"title": "The Matrix", "rating": 4.8, "externalId": "x1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"id": "the-matrix", "title": "The Matrix", "rating": 4.8})
    );

    // ...but stores nothing, so the movie still does not exist (expected)
    let response = client
        .get(format!("{base}/movies/the-matrix"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_cors_header_on_cross_origin_request() {
    let (handle, base) = start_server().await;

    let response = reqwest::Client::new()
        .get(format!("{base}/movies/goodwill-hunting"))
        .header("Origin", "https://frontend.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_requests_share_no_state() {
    let (handle, base) = start_server().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let base = base.clone();
        tasks.push(tokio::spawn(async move {
            let title = format!("Movie {i}");
            let created: Value = client
                .post(format!("{base}/movies/create-movie"))
                .json(&json!({"title": title, "rating": 3.0}))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            assert_eq!(created["id"], format!("movie-{i}"));

            client
                .get(format!("{base}/movies/movie-{i}"))
                .send()
                .await
                .unwrap()
                .status()
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::NOT_FOUND);
    }

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_stop_releases_port() {
    let (handle, base) = start_server().await;
    handle.stop().await.unwrap();

    let result = reqwest::Client::new()
        .get(format!("{base}/movies/goodwill-hunting"))
        .send()
        .await;
    assert!(result.is_err());
}
