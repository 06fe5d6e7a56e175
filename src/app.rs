//! Root application module.
//!
//! Contains the main App component, AppContext definition, EditorState,
//! ConverterSignals and application-level setup logic following Leptos
//! conventions.

use leptos::prelude::*;

use crate::components::Workspace;
use crate::config::{DARK_MODE_CLASS, DEFAULT_DARK_MODE, DEFAULT_MARKDOWN};
use crate::core::ConverterStatus;
use crate::models::OutputFormat;
use crate::utils::dom;

// ============================================================================
// EditorState
// ============================================================================

/// Document and presentation state edited by the user.
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct EditorState {
    /// Markdown source in the editor.
    pub markdown: RwSignal<String>,
    /// Format used by the download button.
    pub output_format: RwSignal<OutputFormat>,
    /// Dark theme toggle.
    pub dark_mode: RwSignal<bool>,
}

impl EditorState {
    /// Creates editor state with the sample document, DOCX output and the
    /// default theme.
    pub fn new() -> Self {
        Self {
            markdown: RwSignal::new(DEFAULT_MARKDOWN.to_string()),
            output_format: RwSignal::new(OutputFormat::default()),
            dark_mode: RwSignal::new(DEFAULT_DARK_MODE),
        }
    }

    /// Whether there is anything to convert.
    pub fn has_content(&self) -> bool {
        self.markdown.with(|md| !md.trim().is_empty())
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ConverterSignals
// ============================================================================

/// Transient flags driven by the conversion flows.
#[derive(Clone, Copy)]
pub struct ConverterSignals {
    /// A download request is in flight.
    pub is_converting: RwSignal<bool>,
    /// "Copied!" confirmation is showing.
    pub copy_success: RwSignal<bool>,
}

impl ConverterSignals {
    pub fn new() -> Self {
        Self {
            is_converting: RwSignal::new(false),
            copy_success: RwSignal::new(false),
        }
    }
}

impl Default for ConverterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterStatus for ConverterSignals {
    fn is_converting(&self) -> bool {
        self.is_converting.get_untracked()
    }

    fn set_converting(&self, converting: bool) {
        self.is_converting.set(converting);
    }

    fn set_copy_success(&self, copied: bool) {
        self.copy_success.set(copied);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Editor content, output format and theme.
    pub editor: EditorState,

    /// Conversion progress flags.
    pub converter: ConverterSignals,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            editor: EditorState::new(),
            converter: ConverterSignals::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Mirrors the dark mode flag onto the `<html>` element
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        dom::set_root_class(DARK_MODE_CLASS, ctx.editor.dark_mode.get());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f172a;
                    color: #e2e8f0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #94a3b8; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #1e293b;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Workspace />
        </ErrorBoundary>
    }
}
