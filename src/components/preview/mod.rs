//! Live preview pane.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::render_markdown;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");
stylance::import_crate_style!(md_css, "src/components/preview/markdown.module.css");

/// Sanitized HTML rendering of the editor content.
///
/// Re-renders whenever the Markdown changes. The pane scrolls independently
/// and is kept in step with the editor by the workspace.
#[component]
pub fn MarkdownPreview(
    node_ref: NodeRef<leptos::html::Div>,
    on_scroll: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let markdown = ctx.editor.markdown;

    let rendered = Memo::new(move |_| markdown.with(|md| render_markdown(md)));

    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Preview"</h2>
            <div
                node_ref=node_ref
                class=format!("{} {} scrollbar-thin", css::surface, md_css::markdown)
                on:scroll=move |_| on_scroll.run(())
                inner_html=move || rendered.get()
            />
        </section>
    }
}
