//! Analysis domain models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content type assumed when the caller does not send one.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

fn default_content_type() -> Option<String> {
    Some(DEFAULT_CONTENT_TYPE.to_string())
}

fn default_metadata() -> Option<Map<String, Value>> {
    Some(Map::new())
}

/// Inbound request describing the media to analyze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRequest {
    pub filename: String,
    #[serde(default = "default_content_type")]
    pub content_type: Option<String>,
    #[serde(default = "default_metadata")]
    pub metadata: Option<Map<String, Value>>,
}

impl AnalysisRequest {
    /// Build a request with default content type and empty metadata.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content_type: default_content_type(),
            metadata: default_metadata(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Content type, falling back to the default when explicitly null.
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Raw output of a scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    pub is_deepfake: bool,
    pub confidence: f64,
    pub model_version: String,
    /// Advisory only; no actual latency is introduced.
    pub processing_time_ms: u64,
}

/// Response returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResponse {
    pub filename: String,
    pub is_deepfake: bool,
    pub confidence: f64,
    pub model_version: String,
    pub message: String,
}

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
        }
    }
}
