//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html};

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Raw inline and block HTML
/// - Bare URL autolinking (`https://example.com`)
/// - Typographic quotes and dashes (`"quoted"`, `--`)
/// - Strikethrough, tables and footnotes
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.autolink = true;
    options.parse.smart = true;
    // Raw HTML is passed through here and stripped down by ammonia below
    options.render.r#unsafe = true;

    let html_output = markdown_to_html(markdown, &options);
    ammonia::clean(&html_output)
}
