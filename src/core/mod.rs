//! Core logic for the converter application.
//!
//! This module provides:
//! - [`Converter`] - download and copy flows against the conversion service
//! - [`ScrollSync`] - debounced editor/preview scroll mirroring
//! - [`Scheduler`] and `Debouncer` - cancellable delayed tasks
//! - `ConversionApi` and `Platform` - seams to the network and the browser

mod api;
mod convert;
pub mod error;
mod platform;
mod schedule;
mod scroll;

pub use api::HttpConversionApi;
pub use convert::{Converter, ConverterStatus};
pub use platform::BrowserPlatform;
pub use schedule::{Scheduler, TaskId};
pub use scroll::{PaneSource, ScrollSync};
