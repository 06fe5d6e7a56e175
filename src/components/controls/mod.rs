//! Conversion controls: output format selector and action buttons.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::OutputFormat;

stylance::import_crate_style!(css, "src/components/controls/controls.module.css");

/// Format selector plus "Copy for Docs" and "Download" buttons.
///
/// Both buttons are disabled while the editor is blank; the download button
/// is also disabled while a conversion is in flight.
#[component]
pub fn ConversionControls(on_download: Callback<()>, on_copy: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_format = ctx.editor.output_format;
    let is_converting = ctx.converter.is_converting;
    let copy_success = ctx.converter.copy_success;

    let no_content = Signal::derive(move || !ctx.editor.has_content());

    view! {
        <section class=css::panel>
            <div class=css::row>
                <div class=css::formatGroup>
                    <span class=css::label>"Output Format:"</span>
                    <div class=css::formatButtons>
                        {OutputFormat::ALL
                            .into_iter()
                            .map(|format| {
                                let class = move || {
                                    if output_format.get() == format {
                                        format!("{} {}", css::formatButton, css::selected)
                                    } else {
                                        css::formatButton.to_string()
                                    }
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| output_format.set(format)
                                    >
                                        {format.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=css::actions>
                    <button
                        class=format!("{} {}", css::actionButton, css::copyButton)
                        disabled=move || no_content.get()
                        on:click=move |_| on_copy.run(())
                    >
                        {move || if copy_success.get() {
                            view! { <Icon icon=ic::COPIED /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::COPY /> }.into_any()
                        }}
                        {move || if copy_success.get() { "Copied!" } else { "Copy for Docs" }}
                    </button>

                    <button
                        class=format!("{} {}", css::actionButton, css::downloadButton)
                        disabled=move || is_converting.get() || no_content.get()
                        on:click=move |_| on_download.run(())
                    >
                        {move || if is_converting.get() {
                            view! { <span class=css::spinner><Icon icon=ic::SPINNER /></span> }.into_any()
                        } else {
                            view! { <Icon icon=ic::DOWNLOAD /> }.into_any()
                        }}
                        {move || format!("Download {}", output_format.get().as_str().to_uppercase())}
                    </button>
                </div>
            </div>
        </section>
    }
}
