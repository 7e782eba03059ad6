//! Error types for the application bootstrap.
//!
//! - [`ConfigError`] - backend configuration could not be built or applied
//! - [`MountError`] - the application could not be attached to the document
//! - [`BootError`] - top-level startup failure
//!
//! Conversion is automatic via `From`, so `?` works across the boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building or applying the backend configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was not provided by any source.
    #[error("Missing configuration value {0}")]
    Missing(&'static str),

    /// A value was provided but is blank.
    #[error("Configuration value {0} is empty")]
    Empty(&'static str),

    /// The server URL is not an absolute URL.
    #[error("Invalid server URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },

    /// The server URL is absolute but not served over HTTP(S).
    #[error("Unsupported server URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// The configuration block injected in the page is malformed.
    #[error("Invalid document configuration: {0}")]
    InvalidDocumentConfig(String),

    /// The client was already initialized with other values.
    #[error("Backend client already initialized with a different configuration")]
    AlreadyInitialized,
}

// =============================================================================
// Mount Errors
// =============================================================================

/// Errors while attaching the application to the document.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("Mount selector is empty")]
    EmptySelector,

    #[error("No document available to mount into")]
    NoDocument,

    #[error("Invalid mount selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Nothing in the document matches the selector.
    #[error("Mount target '{0}' not found in document")]
    TargetNotFound(String),

    #[error("Mount target '{0}' is not an HTML element")]
    NotAnHtmlElement(String),
}

// =============================================================================
// Startup Errors
// =============================================================================

/// Fatal startup errors. None of them are retried.
#[derive(Debug, Error)]
pub enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mount(#[from] MountError),

    /// The backend SDK threw while being configured.
    #[error("Backend SDK error: {0}")]
    Sdk(String),
}

impl From<BootError> for JsValue {
    fn from(error: BootError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result alias for startup operations.
pub type BootResult<T> = Result<T, BootError>;

/// Extract a readable message from a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
