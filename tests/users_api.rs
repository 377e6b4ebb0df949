use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;
use user_directory::prelude::*;

fn app() -> Router {
    build_router(bootstrap(ServerConfig::default()).unwrap())
}

fn strict_app() -> Router {
    build_router(
        bootstrap(ServerConfig {
            strict_email: true,
            ..ServerConfig::default()
        })
        .unwrap(),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, path: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post(app: &Router, body: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn user(body: &str) -> User {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn get_seeded_user_returns_json() {
    let app = app();
    let (status, content_type, body) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(user(&body), User::new(1, "Alice", "alice@example.com"));
}

#[tokio::test]
async fn get_rejects_bad_ids_with_plain_text() {
    let app = app();
    let cases = [
        ("/users/", StatusCode::BAD_REQUEST, "missing user id"),
        ("/users/abc", StatusCode::BAD_REQUEST, "invalid user id"),
        ("/users/%FF", StatusCode::BAD_REQUEST, "invalid user id"),
        ("/users/1.0", StatusCode::BAD_REQUEST, "invalid user id"),
        ("/users/0", StatusCode::BAD_REQUEST, "user id must be positive"),
        ("/users/-5", StatusCode::BAD_REQUEST, "user id must be positive"),
        ("/users/42", StatusCode::NOT_FOUND, "user not found"),
    ];
    for (path, expected_status, expected_body) in cases {
        let (status, content_type, body) = get(&app, path).await;
        assert_eq!(status, expected_status, "{}", path);
        assert_eq!(body, expected_body, "{}", path);
        assert!(content_type.unwrap().starts_with("text/plain"), "{}", path);
    }
}

#[tokio::test]
async fn create_then_fetch_scenario() {
    let app = app();

    let (status, content_type, body) = post(&app, r#"{"name":"Carl","email":"carl@x.com"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let carl = user(&body);
    assert_eq!(carl, User::new(3, "Carl", "carl@x.com"));

    let (status, _, body) = get(&app, "/users/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user(&body), carl);

    let (status, _, body) = post(&app, r#"{"name":"Dana","email":"carl@x.com"}"#).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "email already exists");
}

#[tokio::test]
async fn create_rejects_invalid_bodies() {
    let app = app();
    let cases = [
        ("", "invalid request body"),
        ("{", "invalid request body"),
        (r#"{"name": 5}"#, "invalid request body"),
        ("{}", "name is required"),
        (r#"{"name":"   ","email":"e@x.io"}"#, "name is required"),
        (r#"{"name":"Eve"}"#, "email is required"),
        (r#"{"name":"Eve","email":"  "}"#, "email is required"),
    ];
    for (payload, expected) in cases {
        let (status, _, body) = post(&app, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{:?}", payload);
        assert_eq!(body, expected, "{:?}", payload);
    }

    // nothing was stored along the way
    let (status, _, _) = get(&app, "/users/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_uses_last_value_of_repeated_key() {
    let app = app();
    let (status, _, body) = post(&app, r#"{"name":"x","name":"Carl","email":"c@x.io"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    let carl = user(&body);
    assert_eq!(carl.name, "Carl");
    assert_eq!(carl.email, "c@x.io");
}

#[tokio::test]
async fn create_matches_field_names_exactly() {
    let app = app();
    let (status, _, body) = post(&app, r#"{"Name":"Carl","Email":"c@x.io"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "name is required");
}

#[tokio::test]
async fn create_accepts_body_without_content_type() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(r#"{"name":"Nia","email":"nia@x.io"}"#))
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user(&body).id, 3);
}

#[tokio::test]
async fn create_ignores_client_id() {
    let app = app();
    let (status, _, body) = post(&app, r#"{"id":2,"name":"Carl","email":"carl@x.com"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user(&body).id, 3);

    let (_, _, body) = get(&app, "/users/2").await;
    assert_eq!(user(&body).name, "Bob");
}

#[tokio::test]
async fn created_ids_follow_store_size() {
    let app = app();
    for (expected_id, email) in [(3, "a@x.io"), (4, "b@x.io"), (5, "c@x.io")] {
        let payload = format!(r#"{{"name":"N","email":"{}"}}"#, email);
        let (status, _, body) = post(&app, &payload).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user(&body).id, expected_id);
    }
}

#[tokio::test]
async fn email_format_is_not_checked_by_default() {
    let app = app();
    let (status, _, _) = post(&app, r#"{"name":"Lax","email":"nope"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn strict_mode_rejects_bad_email_format() {
    let app = strict_app();
    let (status, _, body) = post(&app, r#"{"name":"Rigid","email":"nope"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "invalid email format");

    let (status, _, _) = post(&app, r#"{"name":"Rigid","email":"r@x.io"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let app = app();
    let (status, _, _) = get(&app, "/accounts/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method("DELETE")
        .uri("/users/1")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_unique_ids() {
    let app = app();
    let mut handles = Vec::new();
    for i in 0..20 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let payload = format!(r#"{{"name":"U{}","email":"u{}@x.io"}}"#, i, i);
            post(&app, &payload).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let (status, _, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        ids.push(user(&body).id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (3..23).collect::<Vec<i64>>());
}
