//! Root application module.
//!
//! Contains the main App component, AppContext definition and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::FolderRouter;
use crate::core::{BrowserNotifier, FolderManager, HashNavigation, HttpRepository};

/// Folder manager wired to the REST API, the URL hash and `window.alert`.
pub type AppManager = FolderManager<HttpRepository, HashNavigation, BrowserNotifier>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`.
#[derive(Clone)]
pub struct AppContext {
    /// Navigation and mutation controller.
    pub manager: AppManager,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            manager: FolderManager::new(
                HttpRepository::default(),
                HashNavigation,
                BrowserNotifier,
            ),
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
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the hash-driven folder router
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

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
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #666; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #c0392b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #2d6cdf;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <FolderRouter />
        </ErrorBoundary>
    }
}
