//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The conversion endpoint is injected at build time through the
//! `CONVERTER_API_URL` environment variable.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application title shown in the header.
pub const APP_TITLE: &str = "LLM Chat to DOCX Converter";

/// Subtitle displayed under the title.
pub const APP_TAGLINE: &str =
    "Convert ChatGPT, Claude, Gemini or Grok chat output to Word or HTML instantly";

/// Source repository linked from the header.
pub const REPOSITORY_URL: &str = "https://github.com/sebauvv/llm-to-docx-converter";

/// Markdown shown in the editor on first load.
pub const DEFAULT_MARKDOWN: &str = "# Hello World\n\nThis is **bold** and *italic*.";

/// Whether the application starts in dark mode.
pub const DEFAULT_DARK_MODE: bool = true;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fallback endpoint used when `CONVERTER_API_URL` is not set at build time.
const DEFAULT_API_URL: &str = "http://localhost:3000/convert";

/// Conversion service endpoint.
pub const API_URL: &str = match option_env!("CONVERTER_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// Conversion request timeout in milliseconds.
///
/// DOCX generation happens server-side and can take several seconds for
/// long transcripts, so this is more generous than a plain content fetch.
pub const FETCH_TIMEOUT_MS: i32 = 30_000;

// =============================================================================
// Export Configuration
// =============================================================================

/// File name used for client-side HTML downloads.
pub const HTML_DOWNLOAD_FILENAME: &str = "document.html";

/// MIME type of the HTML download and the rich clipboard representation.
pub const HTML_MIME: &str = "text/html";

/// MIME type of the plain-text clipboard representation.
pub const TEXT_MIME: &str = "text/plain";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Quiet period before a scroll event is mirrored to the other pane.
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

/// How long the "Copied!" confirmation stays visible.
pub const COPY_FEEDBACK_MS: u32 = 2000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Class toggled on the document root element in dark mode.
pub const DARK_MODE_CLASS: &str = "dark";

