//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for the conversion request
//! - [`ClipboardError`] - Clipboard API failures
//! - [`PlatformError`] - DOM side effects (new tab, file download)
//! - [`ConversionError`] - Everything that can stop a download or copy flow

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to serialize the request body
    #[error("Failed to serialize request: {0}")]
    SerializeFailed(String),
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Clipboard API errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    /// `navigator.clipboard` is missing (insecure context, old browser)
    #[error("Clipboard API not available")]
    Unavailable,
    /// Building the clipboard payload failed
    #[error("Failed to build clipboard item")]
    ItemCreationFailed,
    /// The write promise rejected (permission denied, document not focused)
    #[error("Clipboard write rejected: {0}")]
    WriteRejected(String),
}

/// DOM side-effect errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    /// Browser window or document not available
    #[error("Browser document not available")]
    NoDocument,
    /// Blob or object URL could not be created
    #[error("Failed to create download blob")]
    BlobFailed,
    /// Anchor element could not be created or attached
    #[error("Failed to trigger download")]
    DownloadFailed,
    /// `window.open` returned nothing (usually a popup blocker)
    #[error("Popup blocked while opening {0}")]
    PopupBlocked(String),
}

/// Failure of a download or copy flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Platform(#[from] PlatformError),
    /// The service answered with `success: false`
    #[error("Conversion rejected: {0}")]
    Rejected(String),
    /// `success: true` but the field the flow needs is absent
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
    /// The returned download URL is not safe to open
    #[error("Refusing to open download URL: {0}")]
    InvalidDownloadUrl(String),
}
