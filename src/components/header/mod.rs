//! Page header with title, theme toggle and repository link.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_TAGLINE, APP_TITLE, REPOSITORY_URL};

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let dark_mode = ctx.editor.dark_mode;

    view! {
        <header class=css::header>
            // Repository link (desktop, top right)
            <a
                href=REPOSITORY_URL
                target="_blank"
                rel="noopener noreferrer"
                class=format!("{} {}", css::repoLink, css::desktopOnly)
                aria-label="View on GitHub"
            >
                <Icon icon=ic::REPOSITORY />
            </a>

            <div class=css::titleRow>
                <span class=css::logo><Icon icon=ic::LOGO /></span>
                <h1 class=css::title>{APP_TITLE}</h1>
                <button
                    class=css::themeToggle
                    on:click=move |_| ctx.editor.toggle_dark_mode()
                    aria-label="Toggle dark mode"
                >
                    {move || if dark_mode.get() {
                        view! { <Icon icon=ic::SUN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MOON /> }.into_any()
                    }}
                </button>
            </div>
            <p class=css::tagline>{APP_TAGLINE}</p>

            // Repository link (mobile, below subtitle)
            <a
                href=REPOSITORY_URL
                target="_blank"
                rel="noopener noreferrer"
                class=format!("{} {}", css::repoLinkInline, css::mobileOnly)
                aria-label="View on GitHub"
            >
                <Icon icon=ic::REPOSITORY />
                <span>"View on GitHub"</span>
            </a>
        </header>
    }
}
