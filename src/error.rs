//! Error types for building and driving a flow field.
//!
//! Only construction can fail. Once a field is running, per-frame problems are
//! clamped or skipped inside the render pass rather than surfaced here.

use std::fmt;

use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug)]
pub enum FieldError {
    /// Rejected configuration value
    Config(ConfigError),
    /// Options object could not be parsed
    Json(serde_json::Error),
    /// Missing or unusable browser object (window, canvas, 2d context)
    Host(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value must be finite and strictly positive (or non-negative where noted)
    NonPositive { field: &'static str, value: f64 },
    /// Value must lie in a closed range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Bounding box too small to hold a single row or column
    EmptyLattice { cols: usize, rows: usize },
    /// Bounding box holds more points than a single field may draw
    TooLarge { cols: usize, rows: usize, max: usize },
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FieldError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Config(e) => write!(f, "configuration error: {}", e),
            FieldError::Json(e) => write!(f, "invalid options: {}", e),
            FieldError::Host(msg) => write!(f, "host error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be a positive finite number, got {}", field, value)
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} must be within [{}, {}], got {}", field, min, max, value),
            ConfigError::EmptyLattice { cols, rows } => write!(
                f,
                "bounding box yields an empty lattice ({} cols x {} rows)",
                cols, rows
            ),
            ConfigError::TooLarge { cols, rows, max } => write!(
                f,
                "bounding box yields {} cols x {} rows, more than {} points",
                cols, rows, max
            ),
        }
    }
}

impl From<ConfigError> for FieldError {
    fn from(e: ConfigError) -> Self {
        FieldError::Config(e)
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::Json(e)
    }
}

impl From<FieldError> for JsValue {
    fn from(e: FieldError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
