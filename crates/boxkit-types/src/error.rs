//! Error types for boxkit.

/// Errors produced by boxkit.
#[derive(Debug, thiserror::Error)]
pub enum BoxkitError {
    /// No enabled parse category accepted the input.
    #[error("invalid value {input:?}: expected {expected}")]
    InvalidValue { input: String, expected: String },

    /// A tree operation referenced a box that does not exist.
    #[error("unknown box #{0}")]
    UnknownBox(usize),

    #[error("config error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl BoxkitError {
    /// Build an `InvalidValue` error for `input`.
    pub fn invalid(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
            expected: expected.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BoxkitError>;
