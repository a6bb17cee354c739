//! Navigation bar.
//!
//! Brand link, one link per routed page with active highlighting, and the
//! theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::icons as ic;
use crate::components::router::Link;
use crate::config::{APP_NAME, PREFERS_DARK_QUERY};
use crate::models::{Page, Theme};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

const NAV_PAGES: [Page; 5] = [
    Page::Landing,
    Page::Dashboard,
    Page::Docs,
    Page::Analytics,
    Page::Settings,
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class=css::bar>
            <Link to=Page::Landing class=css::brand>
                <Icon icon=ic::SHIELD />
                <span>{APP_NAME}</span>
            </Link>
            <div class=css::links>
                {NAV_PAGES
                    .into_iter()
                    .map(|page| view! {
                        <Link to=page class=css::link active_class=css::active>
                            {page.title()}
                        </Link>
                    })
                    .collect_view()}
                <ThemeToggle />
            </div>
        </nav>
    }
}

/// Light/dark switch. `System` resolves through the media query first.
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_app().theme;
    let prefers_dark = leptos_use::use_media_query(PREFERS_DARK_QUERY);
    let current = theme.theme();

    let is_dark = Signal::derive(move || current.get().resolved(prefers_dark.get()) == Theme::Dark);
    let toggle = move |_: leptos::ev::MouseEvent| {
        theme.set(current.get_untracked().toggled(prefers_dark.get_untracked()));
    };

    view! {
        <button
            class=css::toggle
            on:click=toggle
            title=move || if is_dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            {move || if is_dark.get() {
                view! { <Icon icon=ic::SUN /> }.into_any()
            } else {
                view! { <Icon icon=ic::MOON /> }.into_any()
            }}
        </button>
    }
}
