use leptos::prelude::*;

use super::css;
use crate::components::motion::Reveal;
use crate::components::router::use_route;
use crate::config::{APP_NAME, motion};
use crate::models::{AppRoute, Motion, Page, Transition};

const CTA_MOTION: Motion = Motion::grow(0.9, Transition::tween(motion::CTA_REVEAL));

#[component]
pub fn CallToAction() -> impl IntoView {
    let router = use_route();

    view! {
        <Reveal motion=CTA_MOTION class=css::cta>
            <div class=css::card>
                <h2 class=css::ctaTitle>"Ready to Experience the Future of DNS?"</h2>
                <p class=css::muted>
                    {format!(
                        "Join thousands of users who trust {} for secure, fast, and intelligent domain resolution.",
                        APP_NAME
                    )}
                </p>
                <div class=css::actions>
                    <button
                        class=format!("{} {}", css::primaryButton, css::pulse)
                        on:click=move |_| router.navigate(AppRoute::Page(Page::Dashboard))
                    >
                        "Start Free Trial"
                    </button>
                    <button
                        class=css::outlineButton
                        on:click=move |_| router.navigate(AppRoute::Page(Page::Docs))
                    >
                        "View Documentation"
                    </button>
                </div>
            </div>
        </Reveal>
    }
}
