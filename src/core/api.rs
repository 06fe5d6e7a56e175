//! Client for the remote conversion service.

use crate::config::API_URL;
use crate::core::error::FetchError;
use crate::models::{ConversionRequest, ConversionResponse, OutputFormat};
use crate::utils::post_json;

/// Converts Markdown through the remote service.
#[allow(async_fn_in_trait)]
pub trait ConversionApi {
    /// POST `{content, output_format}` and return the parsed envelope.
    ///
    /// HTTP status is not inspected; `success: false` comes back as `Ok`.
    async fn convert(
        &self,
        content: &str,
        output_format: OutputFormat,
    ) -> Result<ConversionResponse, FetchError>;
}

/// [`ConversionApi`] over the browser Fetch API.
#[derive(Clone, Debug)]
pub struct HttpConversionApi {
    endpoint: String,
}

impl HttpConversionApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpConversionApi {
    fn default() -> Self {
        Self::new(API_URL)
    }
}

impl ConversionApi for HttpConversionApi {
    async fn convert(
        &self,
        content: &str,
        output_format: OutputFormat,
    ) -> Result<ConversionResponse, FetchError> {
        let body = ConversionRequest::new(content, output_format).to_json()?;
        post_json(&self.endpoint, &body).await
    }
}
