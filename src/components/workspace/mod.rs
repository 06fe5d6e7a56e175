//! Page layout: header, editor/preview grid and conversion controls.

mod hooks;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::controls::ConversionControls;
use crate::components::editor::MarkdownEditor;
use crate::components::header::Header;
use crate::components::preview::MarkdownPreview;
use crate::models::Pane;

use hooks::{NodeRefPanes, use_converter, use_scroll_sync};

stylance::import_crate_style!(css, "src/components/workspace/workspace.module.css");

/// Main page.
///
/// Owns the pane node refs and the long-lived converter and scroll sync
/// instances, and hands each child the callbacks it needs.
#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let editor_ref = NodeRef::<leptos::html::Textarea>::new();
    let preview_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_sync = use_scroll_sync(NodeRefPanes {
        editor: editor_ref,
        preview: preview_ref,
    });
    let converter = use_converter(ctx.converter);

    let on_editor_scroll = Callback::new(move |_: ()| {
        scroll_sync.with_value(|sync| sync.on_scroll(Pane::Editor));
    });
    let on_preview_scroll = Callback::new(move |_: ()| {
        scroll_sync.with_value(|sync| sync.on_scroll(Pane::Preview));
    });

    let on_download = Callback::new(move |_: ()| {
        let markdown = ctx.editor.markdown.get_untracked();
        let format = ctx.editor.output_format.get_untracked();
        let converter = converter.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            converter.download(&markdown, format).await;
        });
    });
    let on_copy = Callback::new(move |_: ()| {
        let markdown = ctx.editor.markdown.get_untracked();
        let converter = converter.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            converter.copy_for_docs(&markdown).await;
        });
    });

    view! {
        <div class=css::page>
            <div class=css::container>
                <Header />
                <div class=css::grid>
                    <MarkdownEditor node_ref=editor_ref on_scroll=on_editor_scroll />
                    <MarkdownPreview node_ref=preview_ref on_scroll=on_preview_scroll />
                </div>
                <ConversionControls on_download=on_download on_copy=on_copy />
            </div>
        </div>
    }
}
