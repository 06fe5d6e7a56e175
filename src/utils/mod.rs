//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`render_markdown`] - Markdown rendering with XSS sanitization
//! - [`post_json`] - JSON POST with timeout
//! - [`clipboard`] - Async Clipboard API wrappers
//! - [`TimeoutScheduler`] - `setTimeout`-backed task scheduler
//! - [`validate_download_url`] - URL security validation

pub mod clipboard;
pub mod dom;
mod fetch;
pub mod format;
mod markdown;
mod timer;
mod url;

pub use fetch::post_json;
pub use markdown::render_markdown;
pub use timer::TimeoutScheduler;
pub use url::{UrlValidation, validate_download_url};
