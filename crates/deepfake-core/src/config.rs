//! Service settings.
//!
//! Defaults cover the whole service; an optional TOML file may override any
//! subset of fields and the CLI layers its own flags on top.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service version reported by the liveness endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default human-readable service name.
pub const DEFAULT_PROJECT_NAME: &str = "Deepfake Detection API";

/// Default versioned prefix for API routes.
pub const DEFAULT_API_PREFIX: &str = "/v1";

/// Routes mounted at fixed paths; configurable paths must avoid them.
pub const RESERVED_PATHS: &[&str] = &["/", "/health", "/openapi.json"];

/// Whether `path` is `base` or lies beneath it.
fn overlaps(base: &str, path: &str) -> bool {
    path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub project_name: String,
    pub version: String,
    pub api_prefix: String,
    pub host: String,
    pub port: u16,
    pub docs_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            version: VERSION.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            docs_url: "/docs".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> CoreResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can be mounted on a router.
    pub fn validate(&self) -> CoreResult<()> {
        if self.project_name.trim().is_empty() {
            return Err(CoreError::config("project_name must not be empty"));
        }
        for (name, path) in [("api_prefix", &self.api_prefix), ("docs_url", &self.docs_url)] {
            if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
                return Err(CoreError::config(format!(
                    "{name} must start with '/' and not end with '/': {path:?}"
                )));
            }
            if RESERVED_PATHS.contains(&path.as_str()) {
                return Err(CoreError::config(format!(
                    "{name} collides with a built-in route: {path:?}"
                )));
            }
        }
        if overlaps(&self.api_prefix, &self.docs_url) || overlaps(&self.docs_url, &self.api_prefix) {
            return Err(CoreError::config(format!(
                "docs_url {:?} overlaps api_prefix {:?}",
                self.docs_url, self.api_prefix
            )));
        }
        Ok(())
    }

    /// Full path of the analysis endpoint.
    pub fn analysis_path(&self) -> String {
        format!("{}/analysis/deepfake", self.api_prefix)
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
