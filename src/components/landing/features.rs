use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::components::motion::Reveal;
use crate::config::motion;
use crate::models::{Motion, Transition};

struct Feature {
    icon: IconData,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: ic::SHIELD,
        title: "AI Threat Detection",
        description: "Advanced machine learning algorithms detect and block malicious domains in real-time.",
    },
    Feature {
        icon: ic::ZAP,
        title: "Lightning Fast",
        description: "Intelligent caching and optimization deliver sub-millisecond response times.",
    },
    Feature {
        icon: ic::BRAIN,
        title: "Smart Analysis",
        description: "Comprehensive domain analysis with security scoring and recommendations.",
    },
    Feature {
        icon: ic::GLOBE,
        title: "Global Network",
        description: "Distributed infrastructure ensures optimal performance worldwide.",
    },
];

const SECTION_MOTION: Motion = Motion::fade(Transition::tween(motion::FEATURES_REVEAL));

/// Card `index` rises after a per-index stagger.
fn card_motion(index: usize) -> Motion {
    Motion::rise(
        20.0,
        Transition::tween(motion::FEATURE_CARD).delayed(index as u32 * motion::FEATURE_CARD_STAGGER),
    )
}

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <Reveal motion=SECTION_MOTION class=css::features>
            <div class=css::sectionHeader>
                <h2 class=css::sectionTitle>"Why Choose Bhai Ka DNS?"</h2>
                <p class=css::muted>"Cutting-edge features powered by artificial intelligence"</p>
            </div>
            <div class=css::featureGrid>
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| view! {
                        <Reveal motion=card_motion(index)>
                            <div class=css::featureCard>
                                <div class=css::featureIcon><Icon icon=feature.icon /></div>
                                <h3>{feature.title}</h3>
                                <p class=css::muted>{feature.description}</p>
                            </div>
                        </Reveal>
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_stagger() {
        assert_eq!(card_motion(0).transition.delay_ms(), 0);
        assert_eq!(card_motion(3).transition.delay_ms(), 300);
        assert_eq!(card_motion(3).transition.duration_ms(), 500);
    }
}
