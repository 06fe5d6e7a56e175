//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OutputFormat`], [`ConversionRequest`], [`ConversionResponse`] - Conversion service wire format
//! - [`Pane`], [`ScrollMetrics`] - Editor/preview scroll geometry

mod conversion;
mod scroll;

pub use conversion::{ConversionData, ConversionRequest, ConversionResponse, OutputFormat};
pub use scroll::{Pane, ScrollMetrics};
