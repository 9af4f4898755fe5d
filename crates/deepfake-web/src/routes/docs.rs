//! Documentation route handlers.
//!
//! Serves the rendered docs page and the generated OpenAPI document.

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::openapi;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "docs.html")]
struct DocsTemplate {
    title: String,
    version: String,
    analysis_path: String,
    model_version: String,
}

/// GET / - Redirect to the documentation.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.settings.docs_url.clone())],
    )
}

/// GET /docs - Human-readable API reference.
pub async fn docs_page(State(state): State<AppState>) -> Response {
    let settings = &state.settings;
    let template = DocsTemplate {
        title: settings.project_name.clone(),
        version: settings.version.clone(),
        analysis_path: settings.analysis_path(),
        model_version: state.scorer.model_version().to_string(),
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render docs page");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response()
        }
    }
}

/// GET /openapi.json - Machine-readable API description.
pub async fn openapi_json(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(openapi::document(&state.settings))
}
