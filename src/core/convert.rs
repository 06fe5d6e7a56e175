//! Download and copy flows.
//!
//! [`Converter`] drives one request against the conversion service per user
//! action and turns the reply into a side effect:
//!
//! - **Download**: DOCX opens the returned link in a new tab, HTML is saved
//!   locally as `document.html`.
//! - **Copy for Docs**: the HTML rendition goes to the clipboard together
//!   with the original Markdown as plain text. If that fails, plain Markdown
//!   is copied instead.
//!
//! Every failure ends in [`Platform::report_failure`] and is otherwise
//! swallowed; there are no retries.

use std::cell::Cell;

use crate::config::{COPY_FEEDBACK_MS, HTML_DOWNLOAD_FILENAME, HTML_MIME};
use crate::core::api::ConversionApi;
use crate::core::error::ConversionError;
use crate::core::platform::Platform;
use crate::core::schedule::{Scheduler, TaskId};
use crate::models::{ConversionData, OutputFormat};
use crate::utils::{UrlValidation, validate_download_url};

/// UI flags owned by the view layer.
pub trait ConverterStatus: Clone + 'static {
    fn is_converting(&self) -> bool;
    fn set_converting(&self, converting: bool);
    fn set_copy_success(&self, copied: bool);
}

/// Clears `is_converting` when the download flow ends, however it ends.
struct ConvertingGuard<'a, S: ConverterStatus>(&'a S);

impl<'a, S: ConverterStatus> ConvertingGuard<'a, S> {
    fn enter(status: &'a S) -> Self {
        status.set_converting(true);
        Self(status)
    }
}

impl<S: ConverterStatus> Drop for ConvertingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.set_converting(false);
    }
}

/// Conversion orchestrator.
pub struct Converter<A, P, S, T> {
    api: A,
    platform: P,
    status: S,
    scheduler: T,
    copy_reset: Cell<Option<TaskId>>,
}

impl<A, P, S, T> Converter<A, P, S, T>
where
    A: ConversionApi,
    P: Platform,
    S: ConverterStatus,
    T: Scheduler,
{
    pub fn new(api: A, platform: P, status: S, scheduler: T) -> Self {
        Self {
            api,
            platform,
            status,
            scheduler,
            copy_reset: Cell::new(None),
        }
    }

    /// Convert `markdown` and deliver it in `format`.
    ///
    /// Blank input is ignored, as is a request made while another download
    /// is still in flight.
    pub async fn download(&self, markdown: &str, format: OutputFormat) {
        if markdown.trim().is_empty() {
            return;
        }
        if self.status.is_converting() {
            self.platform.log("Conversion already in progress");
            return;
        }

        let _guard = ConvertingGuard::enter(&self.status);
        if let Err(e) = self.try_download(markdown, format).await {
            self.platform.report_failure("Download failed", &e);
        }
    }

    async fn try_download(&self, markdown: &str, format: OutputFormat) -> Result<(), ConversionError> {
        let data = self.request(markdown, format).await?;

        match format {
            OutputFormat::Docx => {
                let url = data
                    .download_url
                    .ok_or(ConversionError::MissingField("download_url"))?;
                let url = match validate_download_url(&url) {
                    UrlValidation::Valid(url) => url,
                    UrlValidation::Invalid(err) => {
                        return Err(ConversionError::InvalidDownloadUrl(err.to_string()));
                    }
                };
                self.platform.open_url(&url)?;
            }
            OutputFormat::Html => {
                let html = data.html.ok_or(ConversionError::MissingField("html"))?;
                self.platform
                    .save_file(HTML_DOWNLOAD_FILENAME, &html, HTML_MIME)?;
            }
        }
        Ok(())
    }

    /// Copy the HTML rendition of `markdown` for pasting into Google Docs.
    pub async fn copy_for_docs(&self, markdown: &str) {
        if markdown.trim().is_empty() {
            return;
        }

        match self.try_copy_rich(markdown).await {
            Ok(()) => self.flash_copy_success(),
            // The service answered but there is nothing worth copying
            Err(e @ (ConversionError::Rejected(_) | ConversionError::MissingField(_))) => {
                self.platform.report_failure("Copy failed", &e);
            }
            Err(e) => {
                self.platform.report_failure("Copy failed", &e);
                match self.platform.write_clipboard_text(markdown).await {
                    Ok(()) => self.flash_copy_success(),
                    Err(fallback) => self
                        .platform
                        .report_failure("Fallback copy failed", &ConversionError::from(fallback)),
                }
            }
        }
    }

    async fn try_copy_rich(&self, markdown: &str) -> Result<(), ConversionError> {
        let data = self.request(markdown, OutputFormat::Html).await?;
        let html = data.html.ok_or(ConversionError::MissingField("html"))?;
        self.platform.write_clipboard_rich(&html, markdown).await?;
        Ok(())
    }

    async fn request(
        &self,
        markdown: &str,
        format: OutputFormat,
    ) -> Result<ConversionData, ConversionError> {
        let response = self.api.convert(markdown, format).await?;
        if !response.success {
            return Err(ConversionError::Rejected(response.failure_message()));
        }
        self.platform
            .log(&format!("Converted document ({})", response.data.summary()));
        Ok(response.data)
    }

    /// Raise `copy_success` and lower it again after [`COPY_FEEDBACK_MS`].
    ///
    /// A newer copy restarts the countdown.
    fn flash_copy_success(&self) {
        self.status.set_copy_success(true);

        if let Some(id) = self.copy_reset.take() {
            self.scheduler.cancel(id);
        }
        let status = self.status.clone();
        let id = self.scheduler.schedule(
            COPY_FEEDBACK_MS,
            Box::new(move || status.set_copy_success(false)),
        );
        self.copy_reset.set(Some(id));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::error::{ClipboardError, FetchError, PlatformError};
    use crate::core::schedule::testing::ManualScheduler;
    use crate::models::ConversionResponse;

    // -------------------------------------------------------------------------
    // Fakes
    // -------------------------------------------------------------------------

    struct FakeApi {
        reply: Result<ConversionResponse, FetchError>,
        requests: RefCell<Vec<(String, OutputFormat)>>,
    }

    impl FakeApi {
        fn replying(reply: Result<ConversionResponse, FetchError>) -> Self {
            Self {
                reply,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConversionApi for FakeApi {
        async fn convert(
            &self,
            content: &str,
            output_format: OutputFormat,
        ) -> Result<ConversionResponse, FetchError> {
            self.requests
                .borrow_mut()
                .push((content.to_string(), output_format));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct FakePlatform {
        fail_open: bool,
        fail_rich: bool,
        fail_text: bool,
        opened: RefCell<Vec<String>>,
        saved: RefCell<Vec<(String, String, String)>>,
        rich: RefCell<Vec<(String, String)>>,
        text: RefCell<Vec<String>>,
        failures: RefCell<Vec<String>>,
    }

    impl Platform for FakePlatform {
        fn open_url(&self, url: &str) -> Result<(), PlatformError> {
            if self.fail_open {
                return Err(PlatformError::PopupBlocked(url.to_string()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn save_file(&self, filename: &str, contents: &str, mime: &str) -> Result<(), PlatformError> {
            self.saved
                .borrow_mut()
                .push((filename.to_string(), contents.to_string(), mime.to_string()));
            Ok(())
        }

        async fn write_clipboard_rich(&self, html: &str, plain: &str) -> Result<(), ClipboardError> {
            if self.fail_rich {
                return Err(ClipboardError::WriteRejected("NotAllowedError".into()));
            }
            self.rich
                .borrow_mut()
                .push((html.to_string(), plain.to_string()));
            Ok(())
        }

        async fn write_clipboard_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail_text {
                return Err(ClipboardError::Unavailable);
            }
            self.text.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn log(&self, _message: &str) {}

        fn report_failure(&self, context: &str, error: &ConversionError) {
            self.failures
                .borrow_mut()
                .push(format!("{}: {}", context, error));
        }
    }

    #[derive(Clone, Default)]
    struct FakeStatus {
        converting: Rc<Cell<bool>>,
        copied: Rc<Cell<bool>>,
        converting_history: Rc<RefCell<Vec<bool>>>,
    }

    impl ConverterStatus for FakeStatus {
        fn is_converting(&self) -> bool {
            self.converting.get()
        }

        fn set_converting(&self, converting: bool) {
            self.converting.set(converting);
            self.converting_history.borrow_mut().push(converting);
        }

        fn set_copy_success(&self, copied: bool) {
            self.copied.set(copied);
        }
    }

    type TestConverter = Converter<FakeApi, FakePlatform, FakeStatus, Rc<ManualScheduler>>;

    fn converter(
        reply: Result<ConversionResponse, FetchError>,
        platform: FakePlatform,
    ) -> (TestConverter, FakeStatus, Rc<ManualScheduler>) {
        let status = FakeStatus::default();
        let clock = Rc::new(ManualScheduler::new());
        let converter = Converter::new(
            FakeApi::replying(reply),
            platform,
            status.clone(),
            clock.clone(),
        );
        (converter, status, clock)
    }

    fn docx_reply(url: &str) -> Result<ConversionResponse, FetchError> {
        Ok(serde_json::from_value(serde_json::json!({
            "success": true,
            "data": { "download_url": url, "output_format": "docx", "size_bytes": 123 },
            "timestamp": "2024-01-01T00:00:00",
            "message": "ok"
        }))
        .unwrap())
    }

    fn html_reply(html: &str) -> Result<ConversionResponse, FetchError> {
        Ok(serde_json::from_value(serde_json::json!({
            "success": true,
            "data": { "html": html, "output_format": "html", "size_bytes": html.len() },
            "timestamp": "2024-01-01T00:00:00",
            "message": "ok"
        }))
        .unwrap())
    }

    fn rejected_reply() -> Result<ConversionResponse, FetchError> {
        Ok(serde_json::from_value(serde_json::json!({
            "success": false,
            "error": "Content too large",
            "timestamp": "2024-01-01T00:00:00"
        }))
        .unwrap())
    }

    // -------------------------------------------------------------------------
    // Download flow
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_download_docx_opens_link() {
        let (conv, status, _) = converter(docx_reply("https://x/y.docx"), FakePlatform::default());

        conv.download("# Title", OutputFormat::Docx).await;

        assert_eq!(*conv.platform.opened.borrow(), vec!["https://x/y.docx"]);
        assert_eq!(
            *conv.api.requests.borrow(),
            vec![("# Title".to_string(), OutputFormat::Docx)]
        );
        assert!(!status.converting.get());
        assert_eq!(*status.converting_history.borrow(), vec![true, false]);
        assert!(conv.platform.failures.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_download_html_saves_file() {
        let (conv, status, _) = converter(html_reply("<p>hi</p>"), FakePlatform::default());

        conv.download("hi", OutputFormat::Html).await;

        assert_eq!(
            *conv.platform.saved.borrow(),
            vec![(
                "document.html".to_string(),
                "<p>hi</p>".to_string(),
                "text/html".to_string()
            )]
        );
        assert!(conv.platform.opened.borrow().is_empty());
        assert!(!status.converting.get());
    }

    #[tokio::test]
    async fn test_download_network_error_is_reported() {
        let (conv, status, _) = converter(
            Err(FetchError::NetworkError("Failed to fetch".into())),
            FakePlatform::default(),
        );

        conv.download("# Title", OutputFormat::Docx).await;

        assert_eq!(
            *conv.platform.failures.borrow(),
            vec!["Download failed: Network error: Failed to fetch"]
        );
        assert!(conv.platform.opened.borrow().is_empty());
        assert!(!status.converting.get());
    }

    #[tokio::test]
    async fn test_download_rejected_response() {
        let (conv, status, _) = converter(rejected_reply(), FakePlatform::default());

        conv.download("# Title", OutputFormat::Html).await;

        assert_eq!(
            *conv.platform.failures.borrow(),
            vec!["Download failed: Conversion rejected: Content too large"]
        );
        assert!(conv.platform.saved.borrow().is_empty());
        assert!(!status.converting.get());
    }

    #[tokio::test]
    async fn test_download_missing_field() {
        // HTML payload while DOCX was requested
        let (conv, status, _) = converter(html_reply("<p>hi</p>"), FakePlatform::default());

        conv.download("hi", OutputFormat::Docx).await;

        assert_eq!(
            *conv.platform.failures.borrow(),
            vec!["Download failed: Response is missing `download_url`"]
        );
        assert!(conv.platform.opened.borrow().is_empty());
        assert!(conv.platform.saved.borrow().is_empty());
        assert!(!status.converting.get());
    }

    #[tokio::test]
    async fn test_download_refuses_script_url() {
        let (conv, _, _) = converter(docx_reply("javascript:alert(1)"), FakePlatform::default());

        conv.download("hi", OutputFormat::Docx).await;

        assert!(conv.platform.opened.borrow().is_empty());
        assert_eq!(conv.platform.failures.borrow().len(), 1);
        assert!(conv.platform.failures.borrow()[0].contains("Refusing to open"));
    }

    #[tokio::test]
    async fn test_download_popup_blocked_still_resets() {
        let platform = FakePlatform {
            fail_open: true,
            ..Default::default()
        };
        let (conv, status, _) = converter(docx_reply("https://x/y.docx"), platform);

        conv.download("hi", OutputFormat::Docx).await;

        assert_eq!(conv.platform.failures.borrow().len(), 1);
        assert!(!status.converting.get());
    }

    #[tokio::test]
    async fn test_download_blank_input_is_ignored() {
        let (conv, status, _) = converter(docx_reply("https://x/y.docx"), FakePlatform::default());

        conv.download("  \n\t ", OutputFormat::Docx).await;

        assert!(conv.api.requests.borrow().is_empty());
        assert!(status.converting_history.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_download_ignored_while_in_flight() {
        let (conv, status, _) = converter(docx_reply("https://x/y.docx"), FakePlatform::default());
        status.converting.set(true);

        conv.download("# Title", OutputFormat::Docx).await;

        assert!(conv.api.requests.borrow().is_empty());
        assert!(conv.platform.opened.borrow().is_empty());
        // The flag belongs to the download already running
        assert!(status.converting.get());
    }

    // -------------------------------------------------------------------------
    // Copy flow
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_copy_writes_html_and_markdown() {
        let (conv, status, _) = converter(html_reply("<h1>T</h1>"), FakePlatform::default());

        conv.copy_for_docs("# T").await;

        assert_eq!(
            *conv.api.requests.borrow(),
            vec![("# T".to_string(), OutputFormat::Html)]
        );
        assert_eq!(
            *conv.platform.rich.borrow(),
            vec![("<h1>T</h1>".to_string(), "# T".to_string())]
        );
        assert!(conv.platform.text.borrow().is_empty());
        assert!(status.copied.get());
        // Copy does not touch the download flag
        assert!(status.converting_history.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_copy_falls_back_to_plain_text() {
        let platform = FakePlatform {
            fail_rich: true,
            ..Default::default()
        };
        let (conv, status, _) = converter(html_reply("<h1>T</h1>"), platform);

        conv.copy_for_docs("# T\n\nbody").await;

        assert_eq!(*conv.platform.text.borrow(), vec!["# T\n\nbody"]);
        assert!(status.copied.get());
        assert_eq!(
            *conv.platform.failures.borrow(),
            vec!["Copy failed: Clipboard write rejected: NotAllowedError"]
        );
    }

    #[tokio::test]
    async fn test_copy_falls_back_when_service_unreachable() {
        let (conv, status, _) = converter(Err(FetchError::Timeout), FakePlatform::default());

        conv.copy_for_docs("# T").await;

        assert_eq!(*conv.platform.text.borrow(), vec!["# T"]);
        assert!(status.copied.get());
    }

    #[tokio::test]
    async fn test_copy_gives_up_when_fallback_fails() {
        let platform = FakePlatform {
            fail_rich: true,
            fail_text: true,
            ..Default::default()
        };
        let (conv, status, clock) = converter(html_reply("<h1>T</h1>"), platform);

        conv.copy_for_docs("# T").await;

        assert!(!status.copied.get());
        assert_eq!(
            *conv.platform.failures.borrow(),
            vec![
                "Copy failed: Clipboard write rejected: NotAllowedError",
                "Fallback copy failed: Clipboard API not available",
            ]
        );
        assert_eq!(clock.pending(), 0);
    }

    #[tokio::test]
    async fn test_copy_rejected_copies_nothing() {
        let (conv, status, _) = converter(rejected_reply(), FakePlatform::default());

        conv.copy_for_docs("# T").await;

        assert!(conv.platform.rich.borrow().is_empty());
        assert!(conv.platform.text.borrow().is_empty());
        assert!(!status.copied.get());
        assert_eq!(conv.platform.failures.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_copy_blank_input_is_ignored() {
        let (conv, status, _) = converter(html_reply("<p></p>"), FakePlatform::default());

        conv.copy_for_docs("   ").await;

        assert!(conv.api.requests.borrow().is_empty());
        assert!(!status.copied.get());
    }

    #[tokio::test]
    async fn test_copy_success_resets_after_feedback_period() {
        let (conv, status, clock) = converter(html_reply("<p>x</p>"), FakePlatform::default());

        conv.copy_for_docs("x").await;
        assert!(status.copied.get());

        clock.advance(u64::from(COPY_FEEDBACK_MS) - 1);
        assert!(status.copied.get());
        clock.advance(1);
        assert!(!status.copied.get());
    }

    #[tokio::test]
    async fn test_repeated_copy_restarts_feedback_timer() {
        let (conv, status, clock) = converter(html_reply("<p>x</p>"), FakePlatform::default());

        conv.copy_for_docs("x").await;
        clock.advance(1500);
        conv.copy_for_docs("x").await;
        assert_eq!(clock.pending(), 1);

        clock.advance(1500);
        assert!(status.copied.get());
        clock.advance(500);
        assert!(!status.copied.get());
    }
}
