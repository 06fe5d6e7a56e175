//! Markdown input pane.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

/// Markdown textarea bound to [`crate::app::EditorState::markdown`].
///
/// # Props
/// - `node_ref`: Handle to the textarea, used for scroll synchronization
/// - `on_scroll`: Invoked on every scroll event of the textarea
#[component]
pub fn MarkdownEditor(
    node_ref: NodeRef<leptos::html::Textarea>,
    on_scroll: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let markdown = ctx.editor.markdown;

    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Markdown Input"</h2>
            <textarea
                node_ref=node_ref
                class=format!("{} scrollbar-thin", css::textarea)
                spellcheck="false"
                placeholder="Enter your Markdown here..."
                prop:value=move || markdown.get()
                on:input=move |ev| markdown.set(event_target_value(&ev))
                on:scroll=move |_| on_scroll.run(())
            />
        </section>
    }
}
