//! Browser side effects used by the conversion flows.
//!
//! [`Platform`] is the seam between the orchestrator and the browser: opening
//! the DOCX link, saving the HTML file, writing the clipboard and reporting
//! failures. [`BrowserPlatform`] is the real implementation.

use crate::core::error::{ClipboardError, ConversionError, PlatformError};
use crate::utils::{clipboard, dom};

/// Side effects needed by [`crate::core::Converter`].
#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Open `url` in a new browsing context.
    fn open_url(&self, url: &str) -> Result<(), PlatformError>;

    /// Offer `contents` to the user as a downloaded file.
    fn save_file(&self, filename: &str, contents: &str, mime: &str) -> Result<(), PlatformError>;

    /// Write an HTML + plain text clipboard entry.
    async fn write_clipboard_rich(&self, html: &str, plain: &str) -> Result<(), ClipboardError>;

    /// Write plain text to the clipboard.
    async fn write_clipboard_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Diagnostic message.
    fn log(&self, message: &str);

    /// Single sink for flow failures. Nothing is shown to the user.
    fn report_failure(&self, context: &str, error: &ConversionError);
}

/// [`Platform`] backed by `web-sys`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        dom::open_in_new_tab(url)
    }

    fn save_file(&self, filename: &str, contents: &str, mime: &str) -> Result<(), PlatformError> {
        dom::download_text_file(filename, contents, mime)
    }

    async fn write_clipboard_rich(&self, html: &str, plain: &str) -> Result<(), ClipboardError> {
        clipboard::write_rich(html, plain).await
    }

    async fn write_clipboard_text(&self, text: &str) -> Result<(), ClipboardError> {
        clipboard::write_text(text).await
    }

    fn log(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::info_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = message;
    }

    fn report_failure(&self, context: &str, error: &ConversionError) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_2(
            &format!("{}:", context).into(),
            &error.to_string().into(),
        );
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (context, error);
    }
}
