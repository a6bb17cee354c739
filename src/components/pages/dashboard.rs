use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, status_view};
use crate::app::use_app;
use crate::components::hooks::use_query;
use crate::components::icons as ic;
use crate::core::api::{Health, keys};
use crate::models::{DashboardStats, DomainCount};
use crate::utils::format::{format_count, format_latency, format_percent};

/// Resolver overview: health, counters and the busiest domains.
#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_app().api;
    let health = use_query(keys::health(), move || api.health());
    let dashboard = use_query(keys::dashboard(), move || api.dashboard());

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1>"Dashboard"</h1>
                {move || status_view(health.get(), health_badge)}
            </header>
            {move || status_view(dashboard.get(), overview)}
        </div>
    }
}

fn health_badge(health: Health) -> impl IntoView {
    let label = match health.version {
        Some(version) => format!("{} · v{}", health.status, version),
        None => health.status,
    };

    view! {
        <span class=css::badge>
            <Icon icon=ic::ACTIVITY />
            {label}
        </span>
    }
}

fn overview(data: DashboardStats) -> impl IntoView {
    let stats = data.stats;
    let cards = [
        ("Total Queries", format_count(stats.total_queries)),
        ("Cache Hit Rate", format_percent(stats.cache_hit_rate())),
        ("Threats Blocked", format_count(stats.threats_blocked)),
        ("Avg Response", format_latency(stats.average_response_time)),
        ("AI Suggestions", format_count(stats.ai_suggestions)),
        ("Errors", format_count(stats.errors)),
    ];

    view! {
        <div class=css::grid>
            {cards
                .into_iter()
                .map(|(label, value)| view! {
                    <div class=css::card>
                        <div class=css::value>{value}</div>
                        <div class=css::muted>{label}</div>
                    </div>
                })
                .collect_view()}
        </div>
        <div class=css::columns>
            <DomainTable title="Top Domains" domains=data.top_domains />
            <DomainTable title="Blocked Domains" domains=data.blocked_domains />
        </div>
    }
}

#[component]
fn DomainTable(title: &'static str, domains: Vec<DomainCount>) -> impl IntoView {
    view! {
        <section class=css::card>
            <h2>{title}</h2>
            {if domains.is_empty() {
                view! { <p class=css::muted>"No data yet"</p> }.into_any()
            } else {
                view! {
                    <table class=css::table>
                        <tbody>
                            {domains
                                .into_iter()
                                .map(|d| view! {
                                    <tr>
                                        <td>{d.domain}</td>
                                        <td class=css::numeric>{format_count(d.count)}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
