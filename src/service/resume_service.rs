use std::path::Path;

use serde_json::Value;

use crate::errors::AppError;

const DEFAULT_CANDIDATE_NAME: &str = "Rohit";

/// The résumé document, read once at startup and served as-is.
#[derive(Debug, Clone)]
pub struct ResumeService {
    document: Value,
}

impl ResumeService {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::ResumeMissing {
            path: path.to_path_buf(),
            source,
        })?;
        let document = serde_json::from_str(&raw).map_err(|source| AppError::ResumeInvalid {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { document })
    }

    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// `personal.name`, or a fixed fallback when the document has none.
    pub fn candidate_name(&self) -> &str {
        self.document
            .pointer("/personal/name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_CANDIDATE_NAME)
    }

    /// The full document, pretty-printed, for the system prompt. Every field
    /// goes in so free-form background sections reach the model too.
    pub fn prompt_context(&self) -> String {
        serde_json::to_string_pretty(&self.document).unwrap_or_else(|_| self.document.to_string())
    }
}
