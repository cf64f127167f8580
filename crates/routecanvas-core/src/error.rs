//! Error handling for RouteCanvas
//!
//! Provides error types for the layers of the application:
//! - Scene errors (precondition violations on canvas operations)
//! - Configuration errors (settings file handling and validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Raised when a caller violates the precondition of a canvas operation,
/// e.g. passing an export order that is not a valid permutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// An export order referenced a position outside the shape list
    #[error("Shape index {index} out of range (scene holds {len} shapes)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of shapes in the scene.
        len: usize,
    },

    /// An export order listed the same shape twice
    #[error("Shape index {index} appears more than once in the export order")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },

    /// The operation is not defined for the target shape
    #[error("Invalid operation on shape {shape_id}: {reason}")]
    InvalidOperation {
        /// The shape the operation was requested on.
        shape_id: u64,
        /// Why the operation is not applicable.
        reason: String,
    },

    /// No shape with the given id lives in the scene
    #[error("Shape {id} not found")]
    ShapeNotFound {
        /// The unknown shape id.
        id: u64,
    },

    /// A shape path was built without any vertex
    #[error("Shape path needs at least one vertex")]
    EmptyPath,

    /// Shapes were added to an export route that was not begun or is closed
    #[error("Export route is not open; begin a route before adding shapes")]
    RouteNotOpen,
}

/// Configuration error type
///
/// Represents failures while reading, writing or validating settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("Failed to read config file: {reason}")]
    Read {
        /// The underlying I/O failure.
        reason: String,
    },

    /// Settings file content could not be parsed
    #[error("Invalid {format} config: {reason}")]
    Parse {
        /// File format that failed to parse.
        format: String,
        /// Parser message.
        reason: String,
    },

    /// Settings could not be serialized
    #[error("Failed to serialize config: {reason}")]
    Serialize {
        /// Serializer message.
        reason: String,
    },

    /// Settings file could not be written
    #[error("Failed to write config file: {reason}")]
    Write {
        /// The underlying I/O failure.
        reason: String,
    },

    /// File extension is neither `.json` nor `.toml`
    #[error("Config file must be .json or .toml")]
    UnsupportedFormat,

    /// A setting holds a value outside its domain
    #[error("Invalid setting {setting}: {reason}")]
    Invalid {
        /// The setting name.
        setting: String,
        /// Why the value is rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::Invalid`] value.
    pub fn invalid(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            setting: setting.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for RouteCanvas
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a scene precondition violation
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
