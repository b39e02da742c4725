//! The ordered list of labels shown on the wheel.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Fixed, ordered list of display labels.
///
/// The length is immutable once constructed. An empty list is representable
/// so callers can hand it over unchecked; the controller refuses to spin it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    labels: Vec<String>,
}

impl ItemList {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a plain JSON array of strings.
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON item file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WheelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
