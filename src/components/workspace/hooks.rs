//! Hooks wiring the core flows to the mounted page.

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::ConverterSignals;
use crate::config::SCROLL_DEBOUNCE_MS;
use crate::core::{BrowserPlatform, Converter, HttpConversionApi, PaneSource, ScrollSync};
use crate::models::Pane;
use crate::utils::TimeoutScheduler;

/// Converter bound to the HTTP service, the browser and the page's signals.
pub type AppConverter =
    Converter<HttpConversionApi, BrowserPlatform, ConverterSignals, TimeoutScheduler>;

pub type AppScrollSync = ScrollSync<NodeRefPanes, TimeoutScheduler>;

/// Editor and preview elements, resolved lazily from their node refs.
#[derive(Clone, Copy)]
pub struct NodeRefPanes {
    pub editor: NodeRef<html::Textarea>,
    pub preview: NodeRef<html::Div>,
}

impl PaneSource for NodeRefPanes {
    type Pane = web_sys::Element;

    fn pane(&self, pane: Pane) -> Option<web_sys::Element> {
        match pane {
            Pane::Editor => self.editor.get_untracked().map(|el| el.unchecked_into()),
            Pane::Preview => self.preview.get_untracked().map(|el| el.unchecked_into()),
        }
    }
}

/// Debounced scroll mirroring between the two panes.
pub fn use_scroll_sync(panes: NodeRefPanes) -> StoredValue<AppScrollSync, LocalStorage> {
    StoredValue::new_local(ScrollSync::new(
        panes,
        TimeoutScheduler::new(),
        SCROLL_DEBOUNCE_MS,
    ))
}

/// Conversion flows reporting progress through `signals`.
///
/// Stored behind an `Rc` so event handlers can move a handle into a
/// spawned future.
pub fn use_converter(signals: ConverterSignals) -> StoredValue<Rc<AppConverter>, LocalStorage> {
    StoredValue::new_local(Rc::new(Converter::new(
        HttpConversionApi::default(),
        BrowserPlatform,
        signals,
        TimeoutScheduler::new(),
    )))
}
