//! HTTP API tests
//!
//! Run with: cargo test --features server

#![cfg(feature = "server")]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use settings_nav::server::router;
use settings_nav::Catalog;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(Catalog::builtin().clone()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn navigation_request(body: Value, accept_language: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .uri("/navigation")
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(lang) = accept_language {
        builder = builder.header(header::ACCEPT_LANGUAGE, lang);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// ============================================================================
// Catalog Endpoints
// ============================================================================

/// Verify status reports catalog size and languages
#[tokio::test]
async fn status_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["entries"], 17);
    assert_eq!(json["data"]["fallback"], "en");
    assert_eq!(json["data"]["languages"].as_array().unwrap().len(), 15);
}

/// Verify the catalog is listed in order
#[tokio::test]
async fn catalog_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], "languages");
    assert_eq!(json["data"][16]["id"], "branding");
    assert_eq!(json["data"][6]["requiredPermissions"]["ADMIN"][0], "iam.policy.write");
}

/// Verify lookup of a single setting and the not-found case
#[tokio::test]
async fn setting_lookup() {
    let response = app()
        .oneshot(Request::builder().uri("/catalog/idp").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["labelKey"], "SETTINGS.LIST.IDP");

    let response = app()
        .oneshot(Request::builder().uri("/catalog/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("nope"));
}

// ============================================================================
// Navigation
// ============================================================================

/// Verify an org reader gets the domain group only
#[tokio::test]
async fn navigation_for_org_reader() {
    let response = app()
        .oneshot(navigation_request(json!({ "permissions": { "MGMT": ["org.read"] } }), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let groups = json["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["groupKey"], "SETTINGS.GROUPS.DOMAIN");
    assert_eq!(groups[0]["entries"][0]["id"], "verified_domains");
    assert_eq!(json["data"]["language"], "en");
}

/// Verify a caller without permissions gets an empty navigation
#[tokio::test]
async fn navigation_without_permissions() {
    let response = app().oneshot(navigation_request(json!({}), None)).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["groups"].as_array().unwrap().len(), 0);
}

/// Verify language comes from the body first, then Accept-Language
#[tokio::test]
async fn navigation_language_selection() {
    let response = app()
        .oneshot(navigation_request(json!({ "language": "de-CH" }), Some("fr")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["data"]["language"], "de");

    let response = app()
        .oneshot(navigation_request(json!({}), Some("sv, ja;q=0.8")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["data"]["language"], "ja");
}

/// Verify unknown service types in the permission set are rejected by the extractor
#[tokio::test]
async fn navigation_rejects_unknown_scope() {
    let response = app()
        .oneshot(navigation_request(json!({ "permissions": { "SYSTEM": ["x"] } }), None))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}
