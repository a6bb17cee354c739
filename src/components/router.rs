//! Application router component.
//!
//! Path-based routing over the history API.
//!
//! # Architecture
//!
//! - **Pathname is the source of truth**: the route signal is derived from
//!   `location.pathname` at start-up and on `popstate`
//! - **In-app links push state**: [`Link`] writes the new path and updates
//!   the signal directly, since `pushState` fires no event
//! - **Exactly one view**: the routed slot renders the single view selected
//!   by the current [`AppRoute`]; unknown paths render [`NotFound`]

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::pages::{Analytics, Dashboard, Documentation, NotFound, Settings};
use crate::components::landing::LandingPage;
use crate::components::shell::ViewShell;
use crate::models::{AppRoute, Page};
use crate::utils::dom;

// ============================================================================
// Route Context
// ============================================================================

/// Context for reading and changing the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext {
    route: RwSignal<AppRoute>,
}

impl RouteContext {
    /// Whether `page` is the active route.
    pub fn is_active(&self, page: Page) -> bool {
        self.route.with(|r| r.page() == Some(page))
    }

    /// Navigate to `route`, adding a history entry.
    ///
    /// Navigating to the active route is a no-op so the view is not
    /// remounted.
    pub fn navigate(&self, route: AppRoute) {
        if self.route.with_untracked(|current| *current == route) {
            return;
        }
        tracing::debug!(path = %route.to_path(), "navigate");
        route.push();
        self.route.set(route);
        dom::scroll_to_top();
    }
}

/// Fetch the [`RouteContext`] provided by [`AppRouter`].
pub fn use_route() -> RouteContext {
    use_context::<RouteContext>().expect("RouteContext must be provided by AppRouter")
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Route table:
/// - `/` → Landing
/// - `/dashboard` → Dashboard
/// - `/docs` → Documentation
/// - `/analytics` → Analytics
/// - `/settings` → Settings
/// - anything else → Not Found
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());
    provide_context(RouteContext { route });

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Identical routes do not re-render the slot
    let current = Memo::new(move |_| route.get());

    view! {
        <ViewShell>
            {move || render_route(current.get())}
        </ViewShell>
    }
}

/// Select the single top-level view for `route`.
fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Page(Page::Landing) => view! { <LandingPage /> }.into_any(),
        AppRoute::Page(Page::Dashboard) => view! { <Dashboard /> }.into_any(),
        AppRoute::Page(Page::Docs) => view! { <Documentation /> }.into_any(),
        AppRoute::Page(Page::Analytics) => view! { <Analytics /> }.into_any(),
        AppRoute::Page(Page::Settings) => view! { <Settings /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
    }
}

// ============================================================================
// Link
// ============================================================================

/// Anchor that navigates in-app.
///
/// Modified clicks (ctrl/meta/shift, middle button) keep the browser's
/// default so links can still open in a new tab.
#[component]
pub fn Link(
    to: Page,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] active_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let router = use_route();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.navigate(AppRoute::Page(to));
    };

    let class_name = move || match active_class {
        Some(active) if router.is_active(to) => format!("{} {}", class, active),
        _ => class.to_string(),
    };

    view! {
        <a href=to.path() class=class_name on:click=on_click>
            {children()}
        </a>
    }
}
