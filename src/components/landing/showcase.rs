use leptos::prelude::*;

use super::css;
use crate::components::motion::Reveal;
use crate::config::motion;
use crate::models::{Motion, Transition};

/// A tab of the showcase: title, summary and highlights.
struct Capability {
    title: &'static str,
    summary: &'static str,
    highlights: &'static [&'static str],
}

static CAPABILITIES: [Capability; 3] = [
    Capability {
        title: "Threat Detection",
        summary: "Every query is scored before it is answered. Known phishing, malware and \
                  command-and-control domains never resolve.",
        highlights: &[
            "Blocklist and model-based verdicts",
            "Confidence score on every lookup",
            "Blocked domains surfaced in analytics",
        ],
    },
    Capability {
        title: "Smart Caching",
        summary: "Hot domains are served from memory with TTL-aware eviction, so repeat \
                  lookups return in well under a millisecond.",
        highlights: &[
            "TTL-respecting cache",
            "Live hit-rate statistics",
            "Upstream failover",
        ],
    },
    Capability {
        title: "Typo Correction",
        summary: "Mistyped domains get suggestions instead of a dead end, and lookalike \
                  domains are flagged before they can fool anyone.",
        highlights: &[
            "Edit-distance suggestions",
            "Homograph detection",
            "Popular-domain awareness",
        ],
    },
];

const SHOWCASE_MOTION: Motion = Motion::rise(50.0, Transition::tween(motion::LOOKUP_REVEAL));

/// Tabbed overview of the resolver's capabilities.
#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let active = RwSignal::new(0usize);

    view! {
        <div id="showcase">
            <Reveal motion=SHOWCASE_MOTION class=css::card>
                <div class=css::tabs role="tablist">
                    {CAPABILITIES
                        .iter()
                        .enumerate()
                        .map(|(index, capability)| view! {
                            <button
                                role="tab"
                                class=move || if active.get() == index {
                                    format!("{} {}", css::tab, css::tabActive)
                                } else {
                                    css::tab.to_string()
                                }
                                on:click=move |_| active.set(index)
                            >
                                {capability.title}
                            </button>
                        })
                        .collect_view()}
                </div>
                {move || {
                    let capability = &CAPABILITIES[active.get()];
                    view! {
                        <div class=css::tabPanel role="tabpanel">
                            <p>{capability.summary}</p>
                            <ul>
                                {capability
                                    .highlights
                                    .iter()
                                    .map(|h| view! { <li>{*h}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                }}
            </Reveal>
        </div>
    }
}
