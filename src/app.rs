//! Root application module.
//!
//! Contains the main App component, the AppContext definition, the
//! Notifier toast handle, and application-level setup logic following
//! Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::{AppRouter, Toaster};
use crate::config::{AppConfig, PREFERS_DARK_QUERY};
use crate::core::{Api, BrowserStorage, QueryClient, QueryKey, ThemeContext, ThemeStorage};
use crate::models::{ToastKind, ToastPosition, ToastQueue};
use crate::utils::dom;

// ============================================================================
// Notifier
// ============================================================================

/// Handle to the global toast queue.
///
/// `Copy` because it only holds a signal and plain configuration.
#[derive(Clone, Copy)]
pub struct Notifier {
    /// Live toasts rendered by the [`Toaster`].
    pub queue: RwSignal<ToastQueue>,
    /// Screen anchor of the toaster.
    pub position: ToastPosition,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(position: ToastPosition, duration_ms: u32, max_visible: usize) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(max_visible)),
            position,
            duration_ms,
        }
    }

    /// Enqueue a toast and schedule its dismissal.
    pub fn notify(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.queue
            .update(|q| id = q.push(kind, message.clone(), description));
        tracing::debug!(id, ?kind, %message, "toast");

        #[cfg(target_arch = "wasm32")]
        {
            let queue = self.queue;
            gloo_timers::callback::Timeout::new(self.duration_ms, move || {
                queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.duration_ms;

        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Success, message, None)
    }

    pub fn error(&self, message: impl Into<String>, description: Option<String>) -> u64 {
        self.notify(ToastKind::Error, message, description)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Info, message, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Warning, message, None)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Constructed once in [`App`] and provided at the root of the component
/// tree; any descendant reaches it with [`use_app`].
///
/// # Architecture
///
/// - **Config**: immutable settings built from `config.rs`
/// - **Queries**: the shared [`QueryClient`] cache
/// - **Theme**: current theme and its persisting setter
/// - **Toasts**: the notification queue
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub api: Api,
    pub queries: QueryClient,
    pub theme: ThemeContext,
    pub toasts: Notifier,
    /// Keys the query client asked to refetch after a window focus.
    pub refetch: RwSignal<Vec<QueryKey>>,
}

impl AppContext {
    pub fn new(config: AppConfig, storage: Arc<dyn ThemeStorage>) -> Self {
        let theme = ThemeContext::new(storage, config.theme_storage_key, config.default_theme);
        Self {
            api: Api::new(config.api_base_url),
            queries: QueryClient::new(config.query_defaults),
            toasts: Notifier::new(
                config.toast_position,
                config.toast_duration_ms,
                config.max_visible_toasts,
            ),
            refetch: RwSignal::new(Vec::new()),
            theme,
            config,
        }
    }

    /// Forward a window focus to the query client.
    pub fn handle_window_focus(&self) {
        let keys = self.queries.on_window_focus();
        if !keys.is_empty() {
            tracing::debug!(count = keys.len(), "refetching on focus");
            self.refetch.set(keys);
        }
    }
}

/// Fetch the [`AppContext`] provided by [`App`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided at root")
}

/// Refetch queries when the window regains focus.
fn setup_focus_listener(ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.handle_window_focus();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;
}

/// Mirror the resolved theme onto the `<html>` class list.
fn setup_theme_class(theme: ThemeContext) {
    let prefers_dark = leptos_use::use_media_query(PREFERS_DARK_QUERY);
    let current = theme.theme();
    Effect::new(move || {
        let resolved = current.get().resolved(prefers_dark.get());
        dom::set_root_theme_class(resolved.as_str());
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the AppContext
/// - Wires window focus and theme class side effects
/// - Wraps the router in an ErrorBoundary for graceful error handling
/// - Mounts the Toaster once
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::from_constants(), Arc::new(BrowserStorage));
    provide_context(ctx.clone());

    setup_focus_listener(ctx.clone());
    setup_theme_class(ctx.theme.clone());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
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
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
        <Toaster />
    }
}
