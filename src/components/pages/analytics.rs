use leptos::prelude::*;

use super::{css, status_view};
use crate::app::use_app;
use crate::components::hooks::use_query;
use crate::core::api::keys;
use crate::models::TrendPoint;
use crate::utils::format::format_count;

/// Query and threat volume over time.
#[component]
pub fn Analytics() -> impl IntoView {
    let api = use_app().api;
    let trends = use_query(keys::trends(), move || api.trends());

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1>"Analytics"</h1>
            </header>
            {move || status_view(trends.get(), trend_chart)}
        </div>
    }
}

/// Bar height of `value` as a percentage of `peak`.
fn bar_height(value: u64, peak: u64) -> f64 {
    if peak == 0 {
        0.0
    } else {
        value as f64 / peak as f64 * 100.0
    }
}

fn trend_chart(points: Vec<TrendPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <p class=css::muted>"No trend data yet"</p> }.into_any();
    }

    let peak = points.iter().map(|p| p.queries).max().unwrap_or(0);

    view! {
        <section class=css::card>
            <div class=css::chart>
                {points
                    .iter()
                    .map(|p| {
                        let title = format!(
                            "{}: {} queries, {} threats",
                            p.timestamp,
                            format_count(p.queries),
                            format_count(p.threats)
                        );
                        view! {
                            <div class=css::bar title=title>
                                <div
                                    class=css::barQueries
                                    style=format!("height: {:.1}%", bar_height(p.queries, peak))
                                ></div>
                                <div
                                    class=css::barThreats
                                    style=format!("height: {:.1}%", bar_height(p.threats, peak))
                                ></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th class=css::numeric>"Queries"</th>
                    <th class=css::numeric>"Threats"</th>
                </tr>
            </thead>
            <tbody>
                {points
                    .into_iter()
                    .map(|p| view! {
                        <tr>
                            <td>{p.timestamp}</td>
                            <td class=css::numeric>{format_count(p.queries)}</td>
                            <td class=css::numeric>{format_count(p.threats)}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
