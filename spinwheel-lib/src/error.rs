//! Error types

/// Errors raised by the wheel engine.
///
/// Re-entrant triggers and stale signals are not errors; they are ignored
/// where they arrive.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    /// A spin was requested for a list with no items.
    #[error("Cannot spin an empty item list")]
    EmptyItemList,

    /// The configuration failed validation.
    #[error("Invalid wheel configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The item file is not a JSON list of strings.
    #[error("Failed to parse item list: {0}")]
    ItemsParse(#[from] serde_json::Error),

    /// The item file could not be read.
    #[error("Failed to read item list: {0}")]
    Io(#[from] std::io::Error),
}

impl WheelError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
