//! Error types for rngrpc generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Template problems never show up here unless strict mode is on: the engine
/// leaves unresolved markers in the output instead of failing.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Reading a descriptor or writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The protoc parameter string could not be parsed
    #[error("invalid generator parameter: {0}")]
    InvalidParameter(String),

    /// A configuration file or descriptor is unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// The plugin request was not a valid `CodeGeneratorRequest`
    #[error("failed to decode request: {0}")]
    RequestDecode(String),

    /// A file listed for generation is absent from the request
    #[error("file not found in request: {0}")]
    UnknownFile(String),

    /// Expansion reported diagnostics while strict mode was enabled
    #[error("template expansion for {construct} reported: {detail}")]
    Expansion { construct: String, detail: String },
}

impl GenerateError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns true for failures that must abort the whole invocation
    ///
    /// Protoc expects generation problems in the response's `error` field,
    /// but a plugin that cannot read its input or write its output has no
    /// response to send.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GenerateError::Io(_) | GenerateError::RequestDecode(_))
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::InvalidParameter(err.to_string())
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}
