use leptos::prelude::*;

use super::css;
use crate::config::DOCS_MARKDOWN;
use crate::utils::markdown_to_html;

/// API reference rendered from the embedded markdown.
#[component]
pub fn Documentation() -> impl IntoView {
    let html = markdown_to_html(DOCS_MARKDOWN);

    view! {
        <div class=css::page>
            <article class=css::markdown inner_html=html />
        </div>
    }
}
