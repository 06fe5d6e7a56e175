//! Wire types for the conversion service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::FetchError;
use crate::utils::format::format_size;

// =============================================================================
// Output Format
// =============================================================================

/// Export target selected in the conversion controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Word document, generated and hosted by the service
    #[default]
    Docx,
    /// Standalone HTML, returned inline
    Html,
}

impl OutputFormat {
    /// All formats in the order they appear in the selector.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Docx, OutputFormat::Html];

    /// Wire name (`docx` / `html`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Html => "html",
        }
    }

    /// Selector button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Docx => "Word (DOCX)",
            Self::Html => "HTML",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request
// =============================================================================

/// Body of `POST <API_URL>`.
#[derive(Clone, Debug, Serialize)]
pub struct ConversionRequest<'a> {
    pub content: &'a str,
    pub output_format: OutputFormat,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(content: &'a str, output_format: OutputFormat) -> Self {
        Self {
            content,
            output_format,
        }
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<String, FetchError> {
        serde_json::to_string(self).map_err(|e| FetchError::SerializeFailed(e.to_string()))
    }
}

// =============================================================================
// Response
// =============================================================================

/// Payload of a successful conversion.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ConversionData {
    /// Presigned URL of the generated DOCX
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Rendered HTML document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Format the service actually produced
    #[serde(default)]
    pub output_format: String,
    /// Size of the generated document
    #[serde(default)]
    pub size_bytes: u64,
    /// Lifetime of `download_url` in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl ConversionData {
    /// One-line description for diagnostics, e.g. `docx, 1.2K, expires in 300s`.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{}, {}",
            self.output_format,
            format_size(self.size_bytes)
        );
        if let Some(secs) = self.expires_in {
            summary.push_str(&format!(", expires in {}s", secs));
        }
        summary
    }
}

/// Response envelope.
///
/// Success and error envelopes share this type: on failure the service
/// omits `data` and `message` and sends `error`/`error_code` instead.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ConversionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: ConversionData,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ConversionResponse {
    /// Best available explanation for an unsuccessful response.
    pub fn failure_message(&self) -> String {
        let reason = self
            .error
            .as_deref()
            .or(Some(self.message.as_str()).filter(|m| !m.is_empty()))
            .unwrap_or("unknown error");

        match &self.error_code {
            Some(code) => format!("{} ({})", reason, code),
            None => reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn body(content: &str, format: OutputFormat) -> Value {
        let raw = ConversionRequest::new(content, format).to_json().unwrap();
        serde_json::from_str(&raw).expect("request body must be valid JSON")
    }

    #[test]
    fn test_request_body_shape() {
        assert_eq!(
            body("# Title", OutputFormat::Docx),
            json!({ "content": "# Title", "output_format": "docx" })
        );
        assert_eq!(
            body("# Title", OutputFormat::Html),
            json!({ "content": "# Title", "output_format": "html" })
        );
    }

    #[test]
    fn test_request_body_escapes_awkward_content() {
        let awkward = [
            "",
            "say \"hi\" and 'bye'",
            "back\\slash\n\ttabs",
            "ünïcödé — 日本語 🦀",
            "{\"content\": \"injected\"}",
        ];
        for content in awkward {
            let value = body(content, OutputFormat::Html);
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), 2);
            assert_eq!(object["content"], content);
            assert_eq!(object["output_format"], "html");
        }
    }

    #[test]
    fn test_parse_docx_response() {
        let raw = r#"{
            "success": true,
            "data": {
                "download_url": "https://x/y.docx",
                "output_format": "docx",
                "size_bytes": 123,
                "expires_in": 300
            },
            "timestamp": "2024-01-01T00:00:00",
            "message": "Conversion successful"
        }"#;
        let resp: ConversionResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.download_url.as_deref(), Some("https://x/y.docx"));
        assert_eq!(resp.data.html, None);
        assert_eq!(resp.data.size_bytes, 123);
        assert_eq!(resp.data.expires_in, Some(300));
        assert_eq!(resp.message, "Conversion successful");
    }

    #[test]
    fn test_parse_error_envelope() {
        let raw = r#"{
            "success": false,
            "error": "Unsupported format",
            "error_code": "INVALID_FORMAT",
            "timestamp": "2024-01-01T00:00:00"
        }"#;
        let resp: ConversionResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.data, ConversionData::default());
        assert_eq!(resp.failure_message(), "Unsupported format (INVALID_FORMAT)");
    }

    #[test]
    fn test_failure_message_fallbacks() {
        let resp = ConversionResponse {
            message: "Content too large".into(),
            ..Default::default()
        };
        assert_eq!(resp.failure_message(), "Content too large");
        assert_eq!(ConversionResponse::default().failure_message(), "unknown error");
    }

    #[test]
    fn test_summary() {
        let data = ConversionData {
            output_format: "docx".into(),
            size_bytes: 1500,
            expires_in: Some(300),
            ..Default::default()
        };
        assert_eq!(data.summary(), "docx, 1.5K, expires in 300s");

        let data = ConversionData {
            output_format: "html".into(),
            size_bytes: 9,
            ..Default::default()
        };
        assert_eq!(data.summary(), "html, 9B");
    }

    #[test]
    fn test_output_format_labels() {
        assert_eq!(OutputFormat::default(), OutputFormat::Docx);
        assert_eq!(OutputFormat::Docx.to_string(), "docx");
        assert_eq!(OutputFormat::Html.label(), "HTML");
        assert_eq!(
            serde_json::from_str::<OutputFormat>("\"html\"").unwrap(),
            OutputFormat::Html
        );
    }
}
