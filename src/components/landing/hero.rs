use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::components::motion::{Animated, Particles};
use crate::components::router::use_route;
use crate::config::{APP_DESCRIPTION, APP_NAME, APP_TAGLINE, motion};
use crate::models::{AppRoute, Motion, Page, Transition};
use crate::utils::dom;

const TEXT_MOTION: Motion = Motion::rise(20.0, Transition::tween(motion::HERO_BLOCK));

const ACTIONS_MOTION: Motion = Motion::rise(
    20.0,
    Transition::tween(motion::HERO_BLOCK).delayed(motion::HERO_STAGGER),
);

/// Headline, tagline and the two primary actions.
#[component]
pub fn Hero(#[prop(into)] mounted: Signal<bool>) -> impl IntoView {
    let router = use_route();

    view! {
        <Animated motion=TEXT_MOTION shown=mounted class=css::heroText>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
            <p class=css::lead>{APP_DESCRIPTION}</p>
        </Animated>

        <Animated motion=ACTIONS_MOTION shown=mounted class=css::actions>
            <button
                class=css::primaryButton
                on:click=move |_| router.navigate(AppRoute::Page(Page::Dashboard))
            >
                "Get Started"
                <Icon icon=ic::ARROW_RIGHT />
            </button>
            <button class=css::outlineButton on:click=|_| dom::scroll_to_id("showcase")>
                <Icon icon=ic::PLAY />
                "Watch Demo"
            </button>
        </Animated>

        <Particles count=motion::PARTICLE_COUNT />
    }
}
