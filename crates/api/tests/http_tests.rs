mod common;

use api::app::build_router;
use api::gql::build_schema;
use api::AppConfig;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use tower::ServiceExt;

fn router(config: AppConfig) -> axum::Router {
    let state = lazy_state(config);
    let schema = build_schema(state.clone());
    build_router(state, schema)
}

fn graphql_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let response = router(offline_config())
        .oneshot(graphql_post("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("bad request: Invalid GraphQL request"));
}

#[tokio::test]
async fn validation_errors_come_back_in_the_graphql_envelope() {
    let response = router(offline_config())
        .oneshot(graphql_post(r#"{"query": "{ noSuchField }"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn graphiql_is_hidden_without_introspection() {
    let response = router(offline_config())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn graphiql_is_served_with_introspection() {
    let config = AppConfig {
        introspection_enabled: true,
        ..offline_config()
    };
    let response = router(config)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_ok_against_a_live_database() {
    let Some(app_state) = setup_test_db().await else {
        return;
    };
    let schema = build_schema(app_state.clone());
    let app = build_router(app_state, schema);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
