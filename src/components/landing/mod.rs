//! Landing page.
//!
//! Hero, live stats, lookup tool, feature grid, showcase and call to action.
//! The hero and stats follow the page's mount flag; everything below the
//! fold reveals once as it scrolls into view.

mod cta;
mod features;
mod hero;
mod live_stats;
mod lookup;
mod showcase;

use leptos::prelude::*;

use crate::components::hooks::use_mount_flag;
use crate::components::motion::{Animated, Reveal};
use crate::config::motion;
use crate::models::{Motion, Transition};

use cta::CallToAction;
use features::FeatureGrid;
use hero::Hero;
use live_stats::LiveStats;
use lookup::LookupTool;
use showcase::FeatureShowcase;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

/// Hero section: rises 50px on a stiff, overdamped spring.
const HERO_MOTION: Motion = Motion::rise(50.0, Transition::spring(280.0, 60.0));

/// Stats section: grows from 80% on a softer spring, slightly later.
const STATS_MOTION: Motion =
    Motion::grow(0.8, Transition::spring(200.0, 50.0).delayed(motion::STATS_DELAY));

const LOOKUP_MOTION: Motion = Motion::rise(50.0, Transition::tween(motion::LOOKUP_REVEAL));

#[component]
pub fn LandingPage() -> impl IntoView {
    let mounted = use_mount_flag();

    view! {
        <div class=css::page>
            <Animated motion=HERO_MOTION shown=mounted class=css::hero>
                <Hero mounted=mounted />
            </Animated>

            <Animated motion=STATS_MOTION shown=mounted>
                <LiveStats />
            </Animated>

            <Reveal motion=LOOKUP_MOTION>
                <LookupTool />
            </Reveal>

            <FeatureGrid />

            <FeatureShowcase />

            <CallToAction />
        </div>
    }
}
