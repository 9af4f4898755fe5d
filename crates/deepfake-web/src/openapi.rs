//! OpenAPI document generation.
//!
//! Component schemas are derived from the Rust types, so the document cannot
//! drift from what the handlers actually accept and return.

use deepfake_core::analysis::model::{AnalysisRequest, AnalysisResponse, HealthResponse};
use deepfake_core::Settings;
use schemars::gen::SchemaSettings;
use serde_json::{json, Value};

use crate::error::FieldError;

/// Build the OpenAPI 3.0 document for the service.
pub fn document(settings: &Settings) -> Value {
    let mut generator = SchemaSettings::openapi3().into_generator();
    let request = generator.subschema_for::<AnalysisRequest>();
    let response = generator.subschema_for::<AnalysisResponse>();
    let health = generator.subschema_for::<HealthResponse>();
    let field_errors = generator.subschema_for::<Vec<FieldError>>();
    let schemas = generator.take_definitions();

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": settings.project_name,
            "version": settings.version,
        },
        "paths": {
            settings.analysis_path(): {
                "post": {
                    "summary": "Analyze media for deepfake content",
                    "operationId": "analyze_media",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": request } }
                    },
                    "responses": {
                        "200": {
                            "description": "Classification result",
                            "content": { "application/json": { "schema": response } }
                        },
                        "400": {
                            "description": "Filename is required",
                            "content": { "application/json": { "schema": detail_schema(json!({ "type": "string" })) } }
                        },
                        "422": {
                            "description": "Validation error",
                            "content": { "application/json": { "schema": detail_schema(json!(field_errors)) } }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "operationId": "health_check",
                    "responses": {
                        "200": {
                            "description": "Service is alive",
                            "content": { "application/json": { "schema": health } }
                        }
                    }
                }
            }
        },
        "components": { "schemas": schemas }
    })
}

fn detail_schema(detail: Value) -> Value {
    json!({
        "type": "object",
        "required": ["detail"],
        "properties": { "detail": detail }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths_follow_settings() {
        let settings = Settings {
            api_prefix: "/api/v2".to_string(),
            ..Settings::default()
        };
        let doc = document(&settings);
        assert!(doc["paths"]["/api/v2/analysis/deepfake"]["post"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
        assert_eq!(doc["info"]["title"], settings.project_name);
    }

    #[test]
    fn test_request_schema_requires_only_filename() {
        let doc = document(&Settings::default());
        let request = &doc["components"]["schemas"]["AnalysisRequest"];
        assert_eq!(request["required"], json!(["filename"]));
        assert!(request["properties"]["content_type"].is_object());
        assert!(request["properties"]["metadata"].is_object());
        assert_eq!(request["properties"]["content_type"]["default"], "image/jpeg");
    }

    #[test]
    fn test_schemas_are_referenced_from_components() {
        let doc = document(&Settings::default());
        let schema = &doc["paths"]["/v1/analysis/deepfake"]["post"]["responses"]["200"]["content"]
            ["application/json"]["schema"];
        assert_eq!(schema["$ref"], "#/components/schemas/AnalysisResponse");
        assert!(doc["components"]["schemas"]["FieldError"].is_object());
    }
}
