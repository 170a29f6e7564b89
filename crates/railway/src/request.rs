//! The request validated by the demo pipelines

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sign-up request with the two fields the validators check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Request {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Load a request from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let format = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match format.as_deref() {
            Some("toml") => Ok(toml::from_str(&std::fs::read_to_string(path)?)?),
            Some("json") => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
            _ => Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Replace the fields that were given explicitly.
    pub fn with_overrides(mut self, name: Option<String>, email: Option<String>) -> Self {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        self
    }
}
