//! UI components built with Leptos.
//!
//! - [`Workspace`] - Page layout wiring editor, preview and controls together
//! - [`header`] - Title bar with theme toggle and repository link
//! - [`editor`] - Markdown textarea
//! - [`preview`] - Live sanitized HTML preview
//! - [`controls`] - Output format selector, copy and download buttons
//! - [`icons`] - Centralized icon definitions

pub mod controls;
pub mod editor;
pub mod header;
pub mod icons;
pub mod preview;
pub mod workspace;

pub use workspace::Workspace;
