//! Animated wrappers.
//!
//! [`Animated`] follows a view's mount flag; [`Reveal`] follows its own
//! visibility latch. [`Particles`] is purely decorative.

use leptos::html;
use leptos::prelude::*;

use crate::components::hooks::use_visibility_latch;
use crate::models::Motion;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/motion.module.css");

/// Section whose pose tracks an externally owned mount flag.
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(into)] shown: Signal<bool>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=class style=move || motion.style(shown.get())>
            {children()}
        </section>
    }
}

/// Section that animates in when it scrolls into view.
///
/// With `once` (the default) it stays shown after the first crossing;
/// otherwise it replays every time it re-enters the viewport.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(default = true)] once: bool,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let shown = use_visibility_latch(node, once);

    view! {
        <section node_ref=node class=class style=move || motion.style(shown.get())>
            {children()}
        </section>
    }
}

/// Looping background dots behind the hero.
///
/// Particle `i` drifts for `3 + 0.2·i` seconds after a `0.1·i` second delay,
/// forever. Positions are random per mount.
#[component]
pub fn Particles(count: usize) -> impl IntoView {
    let particles = (0..count)
        .map(|i| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%; animation-duration: {:.1}s; animation-delay: {:.1}s;",
                dom::random() * 100.0,
                dom::random() * 100.0,
                3.0 + i as f64 * 0.2,
                i as f64 * 0.1,
            );
            view! { <div class=css::particle style=style></div> }
        })
        .collect_view();

    view! { <div class=css::particles aria-hidden="true">{particles}</div> }
}
