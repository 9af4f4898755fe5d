//! HTTP error mapping.
//!
//! Error bodies carry a `detail` field: a string for semantic failures and a
//! list of field errors for bodies that do not match the expected shape.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deepfake_core::CoreError;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

// axum 0.8 renders data errors as this prefix followed by serde_path_to_error's
// `path: message` form. Root-level failures such as a missing field have no path.
// The tests below extract real rejections so a format change shows up there.
const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// One structural problem with a request body.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FieldError {
    /// Location of the offending value, starting with `"body"`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(loc: Vec<String>, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// Interpret the text of a JSON data error.
    pub fn from_data_error(text: &str) -> Self {
        let text = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
        let mut loc = vec!["body".to_string()];

        if let Some(field) = missing_field(text) {
            loc.push(field.to_string());
            return Self::new(loc, "Field required", "missing");
        }

        // Nested failures are reported as `path.to.field: message`.
        if let Some((path, msg)) = text.split_once(": ") {
            if !path.is_empty() && !path.contains(char::is_whitespace) {
                loc.extend(path.split('.').map(str::to_string));
                return Self::new(loc, msg, "type_error");
            }
        }

        Self::new(loc, text, "value_error")
    }
}

fn missing_field(text: &str) -> Option<&str> {
    let start = text.find("missing field `")? + "missing field `".len();
    let len = text[start..].find('`')?;
    Some(&text[start..start + len])
}

/// Errors returned by route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Request passed structural checks but is semantically invalid.
    BadRequest(String),
    /// Request body does not have the required shape.
    Unprocessable(Vec<FieldError>),
    /// Any other rejection with its own status.
    Status(StatusCode, String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => {
                warn!(%detail, "Rejected request");
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Unprocessable(errors) => {
                warn!(?errors, "Request body failed validation");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": errors }))).into_response()
            }
            ApiError::Status(status, detail) => {
                (status, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Internal(detail) => {
                error!(%detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                ApiError::Unprocessable(vec![FieldError::from_data_error(&err.body_text())])
            }
            JsonRejection::JsonSyntaxError(err) => ApiError::Unprocessable(vec![FieldError::new(
                vec!["body".to_string()],
                err.body_text(),
                "json_invalid",
            )]),
            other => ApiError::Status(other.status(), other.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::FromRequest, http::Request};
    use deepfake_core::analysis::model::AnalysisRequest;

    async fn reject(body: &'static str) -> ApiError {
        let request = Request::post("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let rejection = Json::<AnalysisRequest>::from_request(request, &())
            .await
            .unwrap_err();
        ApiError::from(rejection)
    }

    #[tokio::test]
    async fn test_extracted_missing_field_is_located() {
        match reject(r#"{"content_type": "video/mp4"}"#).await {
            ApiError::Unprocessable(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].loc, vec!["body", "filename"]);
                assert_eq!(errors[0].kind, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extracted_type_error_is_located() {
        match reject(r#"{"filename": 5}"#).await {
            ApiError::Unprocessable(errors) => {
                assert_eq!(errors[0].loc, vec!["body", "filename"]);
                assert_eq!(errors[0].kind, "type_error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extracted_syntax_error() {
        match reject(r#"{"filename": "#).await {
            ApiError::Unprocessable(errors) => {
                assert_eq!(errors[0].loc, vec!["body"]);
                assert_eq!(errors[0].kind, "json_invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_location() {
        let err = FieldError::from_data_error(
            "Failed to deserialize the JSON body into the target type: missing field `filename` at line 1 column 29",
        );
        assert_eq!(err.loc, vec!["body", "filename"]);
        assert_eq!(err.kind, "missing");
        assert_eq!(err.msg, "Field required");
    }

    #[test]
    fn test_nested_path_location() {
        let err = FieldError::from_data_error(
            "Failed to deserialize the JSON body into the target type: content_type: invalid type: integer `5`, expected a string at line 1 column 35",
        );
        assert_eq!(err.loc, vec!["body", "content_type"]);
        assert_eq!(err.kind, "type_error");
        assert!(err.msg.starts_with("invalid type"));
    }

    #[test]
    fn test_unlocated_message() {
        let err = FieldError::from_data_error("invalid type: sequence, expected struct AnalysisRequest");
        assert_eq!(err.loc, vec!["body"]);
        assert_eq!(err.kind, "value_error");
    }

    #[test]
    fn test_core_error_mapping() {
        let api: ApiError = CoreError::validation("Filename is required").into();
        assert!(matches!(api, ApiError::BadRequest(ref d) if d == "Filename is required"));

        let api: ApiError = CoreError::config("bad").into();
        assert!(matches!(api, ApiError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unprocessable(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (
                ApiError::Status(StatusCode::UNSUPPORTED_MEDIA_TYPE, "x".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
