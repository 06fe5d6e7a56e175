//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

use crate::core::error::PlatformError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) -> Result<(), PlatformError> {
    let window = window().ok_or(PlatformError::NoDocument)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        _ => Err(PlatformError::PopupBlocked(url.to_string())),
    }
}

/// Build a single-part blob from a string.
pub fn text_blob(contents: &str, mime: &str) -> Result<Blob, PlatformError> {
    let parts = Array::of1(&JsValue::from_str(contents));
    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(|_| PlatformError::BlobFailed)
}

/// Save `contents` as a file through a synthetic `<a download>` click.
///
/// The object URL is revoked as soon as the click has been dispatched.
pub fn download_text_file(filename: &str, contents: &str, mime: &str) -> Result<(), PlatformError> {
    let document = document().ok_or(PlatformError::NoDocument)?;
    let body = document.body().ok_or(PlatformError::NoDocument)?;

    let blob = text_blob(contents, mime)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| PlatformError::BlobFailed)?;

    let result = (|| -> Result<(), PlatformError> {
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into().ok())
            .ok_or(PlatformError::DownloadFailed)?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        body.append_child(&anchor)
            .map_err(|_| PlatformError::DownloadFailed)?;
        anchor.click();
        let _ = body.remove_child(&anchor);
        Ok(())
    })();

    let _ = Url::revoke_object_url(&url);
    result
}
