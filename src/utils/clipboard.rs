//! Async Clipboard API wrappers.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, ClipboardItem};

use super::dom;
use super::fetch::js_error_message;
use crate::config::{HTML_MIME, TEXT_MIME};
use crate::core::error::ClipboardError;

/// `navigator.clipboard`, which is undefined outside secure contexts.
fn clipboard() -> Result<Clipboard, ClipboardError> {
    let navigator = dom::window().ok_or(ClipboardError::Unavailable)?.navigator();
    Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .and_then(|value| value.dyn_into::<Clipboard>().ok())
        .ok_or(ClipboardError::Unavailable)
}

/// Write one clipboard entry carrying both `text/html` and `text/plain`.
///
/// Rich-text paste targets (Google Docs, Word) pick up the HTML, plain-text
/// targets get `plain`.
pub async fn write_rich(html: &str, plain: &str) -> Result<(), ClipboardError> {
    let clipboard = clipboard()?;

    let record = Object::new();
    for (mime, contents) in [(HTML_MIME, html), (TEXT_MIME, plain)] {
        let blob = dom::text_blob(contents, mime).map_err(|_| ClipboardError::ItemCreationFailed)?;
        Reflect::set(&record, &JsValue::from_str(mime), &blob)
            .map_err(|_| ClipboardError::ItemCreationFailed)?;
    }
    let item = ClipboardItem::new_with_record_from_str_to_blob_promise(&record)
        .map_err(|_| ClipboardError::ItemCreationFailed)?;

    JsFuture::from(clipboard.write(&Array::of1(&item)))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::WriteRejected(js_error_message(&e)))
}

/// Write plain text only.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let clipboard = clipboard()?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::WriteRejected(js_error_message(&e)))
}
