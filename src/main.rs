//! Markdown to DOCX/HTML converter, client side.
//!
//! Renders a live preview of the editor content and hands conversion off to
//! the remote service configured in [`config::API_URL`].

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = document().get_element_by_id("app") else {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&"Missing #app mount point".into());
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
