//! Toast surface.
//!
//! Mounted once next to the router; renders the newest toasts from the
//! [`Notifier`](crate::app::Notifier) queue at its configured anchor.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{Notifier, use_app};
use crate::components::icons as ic;
use crate::models::{Toast, ToastKind};

stylance::import_crate_style!(css, "src/components/toaster/toaster.module.css");

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_app().toasts;
    let position = toasts.position;
    let style = if position.is_top() {
        position.style().to_string()
    } else {
        format!("{} flex-direction: column-reverse;", position.style())
    };

    view! {
        <ol class=css::toaster style=style aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.visible())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast notifier=toasts /> }
            />
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast, notifier: Notifier) -> impl IntoView {
    let kind_class = match toast.kind {
        ToastKind::Success => css::success,
        ToastKind::Error => css::error,
        ToastKind::Info => css::info,
        ToastKind::Warning => css::warning,
    };
    let id = toast.id;

    view! {
        <li class=format!("{} {}", css::toast, kind_class) role="status">
            <div class=css::body>
                <p class=css::message>{toast.message}</p>
                {toast.description.map(|d| view! { <p class=css::description>{d}</p> })}
            </div>
            <button
                class=css::close
                title="Dismiss"
                on:click=move |_| notifier.dismiss(id)
            >
                <Icon icon=ic::CLOSE />
            </button>
        </li>
    }
}
