//! Structured content document of the rich-text editor.
//!
//! The editor stores a section body as a JSON tree (`{"type":"doc", ...}`).
//! Folio never interprets the tree; it only parses the serialized form the
//! backend returns and hands the value to whoever renders it.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredDocument(Value);

impl StructuredDocument {
    /// The editor's initial document: a single empty paragraph.
    #[must_use]
    pub fn empty() -> Self {
        Self(json!({
            "type": "doc",
            "content": [{ "type": "paragraph" }]
        }))
    }

    /// Parse the serialized document stored by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedDocument`] if `raw` is not valid JSON.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Ok(Self(serde_json::from_str(raw)?))
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for StructuredDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for StructuredDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
