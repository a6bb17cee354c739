use leptos::prelude::*;

use super::css;
use crate::components::router::Link;
use crate::models::Page;

/// Shown for any path outside the route table.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class=css::page>
            <section class=css::notFound>
                <h1>"404"</h1>
                <p class=css::muted>"Nothing lives at " <code>{path}</code></p>
                <Link to=Page::Landing class=css::homeLink>"Back to home"</Link>
            </section>
        </div>
    }
}
