use leptos::prelude::*;

use super::css;
use crate::app::use_app;
use crate::components::hooks::{QueryStatus, use_query};
use crate::core::api::keys;
use crate::models::StatsSnapshot;
use crate::utils::format::{format_count, format_latency, format_percent};

/// Four headline counters from the analytics endpoint.
#[component]
pub fn LiveStats() -> impl IntoView {
    let api = use_app().api;
    let stats = use_query(keys::stats(), move || api.stats());

    view! {
        <div class=css::stats>
            {move || match stats.get() {
                QueryStatus::Loading => stat_cards(None).into_any(),
                QueryStatus::Success(snapshot) => stat_cards(Some(&snapshot)).into_any(),
                QueryStatus::Error(_) => view! {
                    <p class=css::muted>"Live statistics are unavailable right now."</p>
                }
                .into_any(),
            }}
        </div>
    }
}

fn stat_cards(snapshot: Option<&StatsSnapshot>) -> impl IntoView + use<> {
    let value = |f: fn(&StatsSnapshot) -> String| snapshot.map_or_else(|| "—".to_string(), f);
    let cards = [
        ("Queries Resolved", value(|s| format_count(s.total_queries))),
        ("Cache Hit Rate", value(|s| format_percent(s.cache_hit_rate()))),
        ("Threats Blocked", value(|s| format_count(s.threats_blocked))),
        ("Avg Response", value(|s| format_latency(s.average_response_time))),
    ];

    cards
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class=css::statCard>
                    <span class=css::statValue>{value}</span>
                    <span class=css::statLabel>{label}</span>
                </div>
            }
        })
        .collect_view()
}
