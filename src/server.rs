//! HTTP surface for the settings navigation
//!
//! Endpoints:
//!   GET  /status          - Catalog size and supported languages
//!   GET  /catalog         - All descriptors in catalog order
//!   GET  /catalog/:id     - One descriptor
//!   POST /navigation      - Grouped, filtered navigation for a permission set

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::locale::{negotiate_language, resolve_language, FALLBACK_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::types::{PermissionSet, SettingDescriptor};
use crate::view::{navigation, Group};

// ============================================================================
// Configuration
// ============================================================================

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `SETTINGS_NAV_CATALOG`: JSON catalog file; built-in catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// `PORT`, default 3000
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { catalog_path: None, port: 3000 }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        ServerConfig {
            catalog_path: var("SETTINGS_NAV_CATALOG").filter(|p| !p.is_empty()).map(PathBuf::from),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(default.port),
        }
    }

    /// Load the configured catalog; any validation error is fatal to startup
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct NavigationReq {
    #[serde(default)]
    permissions: PermissionSet,
    language: Option<String>,
}

#[derive(Serialize)]
struct NavigationRes<'a> {
    language: &'static str,
    groups: Vec<Group<'a>>,
}

#[derive(Serialize)]
struct StatusRes {
    entries: usize,
    languages: &'static [&'static str],
    fallback: &'static str,
}

#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

// ============================================================================
// Handlers
// ============================================================================

type AppState = Arc<Catalog>;

async fn get_status(State(catalog): State<AppState>) -> Json<ApiResponse<StatusRes>> {
    Json(ApiResponse::ok(StatusRes {
        entries: catalog.len(),
        languages: SUPPORTED_LANGUAGES,
        fallback: FALLBACK_LANGUAGE,
    }))
}

async fn get_catalog(State(catalog): State<AppState>) -> Json<ApiResponse<Vec<SettingDescriptor>>> {
    Json(ApiResponse::ok(catalog.all_entries().to_vec()))
}

async fn get_setting(
    State(catalog): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ApiResponse<SettingDescriptor>>) {
    match catalog.get(&id) {
        Some(d) => (StatusCode::OK, Json(ApiResponse::ok(d.clone()))),
        None => (StatusCode::NOT_FOUND, Json(ApiResponse::err(format!("unknown setting '{}'", id)))),
    }
}

async fn post_navigation(
    State(catalog): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<NavigationReq>,
) -> Response {
    let language = match (&req.language, headers.get(header::ACCEPT_LANGUAGE)) {
        (Some(lang), _) => resolve_language(lang),
        (None, Some(h)) => h.to_str().map(negotiate_language).unwrap_or(FALLBACK_LANGUAGE),
        (None, None) => FALLBACK_LANGUAGE,
    };
    let groups = navigation(&catalog, &req.permissions);
    Json(ApiResponse::ok(NavigationRes { language, groups })).into_response()
}

// ============================================================================
// Router
// ============================================================================

pub fn router(catalog: Arc<Catalog>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(get_status))
        .route("/catalog", get(get_catalog))
        .route("/catalog/:id", get(get_setting))
        .route("/navigation", post(post_navigation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
