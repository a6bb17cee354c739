//! Collaborator views reached from the navbar.

mod analytics;
mod dashboard;
mod docs;
mod not_found;
mod settings;

use leptos::prelude::*;

use crate::components::hooks::QueryStatus;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use docs::Documentation;
pub use not_found::NotFound;
pub use settings::Settings;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Render `status`, delegating the success case to `ready`.
fn status_view<T, V>(status: QueryStatus<T>, ready: impl FnOnce(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    match status {
        QueryStatus::Loading => view! { <p class=css::muted>"Loading..."</p> }.into_any(),
        QueryStatus::Error(e) => view! { <p class=css::error>{e.to_string()}</p> }.into_any(),
        QueryStatus::Success(data) => ready(data).into_any(),
    }
}
