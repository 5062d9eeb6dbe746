//! HTTP API tests driven through the router with `oneshot`.

mod common;

use api_core::domains::auth::{login, AuthToken, LoginResult};
use api_core::domains::jobs::{Job, NewJob};
use api_core::server::middleware::{token_auth_middleware, AuthUser};
use api_core::server::AppState;
use axum::body::{to_bytes, Body};
use axum::extract::Extension;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::{middleware, Router};
use chrono::NaiveDate;
use common::{create_test_user, unique, TestHarness, TEST_PASSWORD};
use serde_json::{json, Value};
use test_context::test_context;
use tower::ServiceExt;

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/login/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap()
}

fn jobs_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri("/jobs/");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn token_for(ctx: &TestHarness, username: &str) -> String {
    let response = ctx
        .app()
        .oneshot(login_request(username, TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test_context(TestHarness)]
#[tokio::test]
async fn login_returns_the_same_token_twice(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool).await.unwrap();

    let first = token_for(ctx, &user.username).await;
    let second = token_for(ctx, &user.username).await;

    assert_eq!(first.len(), 40);
    assert_eq!(first, second);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn login_action_hands_back_the_stored_token(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool).await.unwrap();

    let LoginResult::Authenticated { token } = login(&user.username, TEST_PASSWORD, &ctx.db_pool)
        .await
        .unwrap()
    else {
        panic!("valid credentials should authenticate");
    };

    let stored = AuthToken::find_by_user(user.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("login should persist a token");
    assert_eq!(token, stored.key);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn token_resolves_to_its_owner(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool).await.unwrap();
    let token = token_for(ctx, &user.username).await;

    let app = Router::new()
        .route(
            "/whoami",
            get(|Extension(auth): Extension<AuthUser>| async move { auth.user_id.to_string() }),
        )
        .route_layer(middleware::from_fn(token_auth_middleware))
        .layer(Extension(AppState {
            db_pool: ctx.db_pool.clone(),
        }));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], user.id.to_string().as_bytes());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn login_with_wrong_password_is_unauthorized(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool).await.unwrap();

    let response = ctx
        .app()
        .oneshot(login_request(&user.username, "wrong"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({ "error": "Invalid credentials" }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn login_with_unknown_user_is_unauthorized(ctx: &TestHarness) {
    let response = ctx
        .app()
        .oneshot(login_request(&unique("ghost"), TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({ "error": "Invalid credentials" }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn jobs_require_a_token(ctx: &TestHarness) {
    let response = ctx.app().oneshot(jobs_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(json_body(response).await["error"].is_string());

    let response = ctx
        .app()
        .oneshot(jobs_request(Some("Bearer not-a-real-token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn jobs_are_listed_newest_first(ctx: &TestHarness) {
    let older = unique("Older notice");
    let newer = unique("Newer notice");
    for (title, date) in [(&older, (2024, 1, 10)), (&newer, (2025, 6, 1))] {
        Job::get_or_create(
            &NewJob {
                title: title.clone(),
                link: "https://www.ibps.in/notice.pdf".to_string(),
                posted_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            },
            &ctx.db_pool,
        )
        .await
        .unwrap();
    }

    let user = create_test_user(&ctx.db_pool).await.unwrap();
    let token = token_for(ctx, &user.username).await;

    let response = ctx
        .app()
        .oneshot(jobs_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let jobs = body.as_array().unwrap();
    let position = |title: &str| {
        jobs.iter()
            .position(|job| job["title"] == title)
            .expect("inserted job should be listed")
    };
    assert!(position(&newer) < position(&older));

    let newer_job = &jobs[position(&newer)];
    assert_eq!(newer_job["posted_date"], "2025-06-01");
    assert_eq!(newer_job["link"], "https://www.ibps.in/notice.pdf");
    assert!(newer_job.get("id").is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn token_scheme_is_accepted(ctx: &TestHarness) {
    let user = create_test_user(&ctx.db_pool).await.unwrap();
    let token = token_for(ctx, &user.username).await;

    let response = ctx
        .app()
        .oneshot(jobs_request(Some(&format!("Token {}", token))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_database_ok(ctx: &TestHarness) {
    let response = ctx
        .app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({ "status": "healthy", "database": { "status": "ok" } })
    );
}
