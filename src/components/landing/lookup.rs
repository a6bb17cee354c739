use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::css;
use crate::app::use_app;
use crate::components::icons as ic;
use crate::config::LOOKUP_STALE_MS;
use crate::core::api::keys;
use crate::models::{LookupRequest, LookupResponse, RecordType, validate_domain};
use crate::utils::format::format_latency;

/// Domain lookup form backed by `POST /api/dns/lookup`.
///
/// Results go through the query client, so repeating a lookup within
/// [`LOOKUP_STALE_MS`] is answered from the cache.
#[component]
pub fn LookupTool() -> impl IntoView {
    let app = use_app();
    let domain = RwSignal::new(String::new());
    let record_type = RwSignal::new(RecordType::default());
    let pending = RwSignal::new(false);
    let input_error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<LookupResponse>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let name = match validate_domain(&domain.get_untracked()) {
            Ok(name) => name,
            Err(e) => {
                input_error.set(Some(e.to_string()));
                return;
            }
        };
        input_error.set(None);

        let rtype = record_type.get_untracked();
        let key = keys::lookup(&name, rtype);
        let client = app.queries.clone();
        let options = client.default_options().with_stale_time_ms(LOOKUP_STALE_MS);
        let api = app.api;
        let toasts = app.toasts;
        let request = LookupRequest {
            domain: name,
            record_type: rtype,
        };

        pending.set(true);
        spawn_local(async move {
            let outcome = client
                .fetch_query_with(&key, options, move || api.lookup(request.clone()))
                .await;
            pending.try_set(false);

            match outcome {
                Ok(response) => {
                    if let Some(threat) = &response.threat
                        && threat.is_malicious
                    {
                        toasts.warning(format!("{} is flagged as malicious", response.domain));
                    }
                    result.try_set(Some(response));
                }
                Err(e) => {
                    toasts.error("Lookup failed", Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class=css::card>
            <h2 class=css::sectionTitle>"DNS Lookup"</h2>
            <form class=css::lookupForm on:submit=submit>
                <input
                    class=css::input
                    type="text"
                    placeholder="example.com"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=domain
                    on:input=move |ev| domain.set(event_target_value(&ev))
                />
                <select
                    class=css::select
                    on:change=move |ev| {
                        if let Ok(t) = event_target_value(&ev).parse::<RecordType>() {
                            record_type.set(t);
                        }
                    }
                >
                    {RecordType::ALL
                        .into_iter()
                        .map(|t| view! {
                            <option value=t.as_str() selected=move || record_type.get() == t>
                                {t.as_str()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <button class=css::primaryButton type="submit" disabled=move || pending.get()>
                    <Icon icon=ic::SEARCH />
                    {move || if pending.get() { "Resolving..." } else { "Lookup" }}
                </button>
            </form>

            {move || input_error.get().map(|e| view! { <p class=css::inputError>{e}</p> })}

            {move || result.get().map(|r| view! { <LookupResult response=r /> })}
        </div>
    }
}

#[component]
fn LookupResult(response: LookupResponse) -> impl IntoView {
    let verdict = response.threat.as_ref().map(|t| {
        if t.is_malicious {
            format!(
                "Blocked: {} ({:.0}% confidence)",
                t.threat_type.as_deref().unwrap_or("malicious"),
                t.confidence * 100.0
            )
        } else {
            "No threats detected".to_string()
        }
    });

    view! {
        <div class=css::lookupResult>
            <p class=css::muted>
                {response.domain.clone()}
                " · "
                {format_latency(response.response_time_ms)}
                {response.cached.then_some(" · cached")}
            </p>
            {verdict.map(|v| view! { <p class=css::verdict>{v}</p> })}
            <table class=css::records>
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th>"Value"</th>
                        <th>"TTL"</th>
                    </tr>
                </thead>
                <tbody>
                    {response
                        .records
                        .into_iter()
                        .map(|record| view! {
                            <tr>
                                <td>{record.record_type}</td>
                                <td>{record.value}</td>
                                <td>{record.ttl}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
