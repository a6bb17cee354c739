use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::use_app;
use crate::components::icons as ic;
use crate::models::Theme;

#[component]
pub fn Settings() -> impl IntoView {
    let app = use_app();
    let theme = app.theme.clone();
    let current = theme.theme();
    let toasts = app.toasts;

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1>"Settings"</h1>
            </header>
            <section class=css::card>
                <h2>"Appearance"</h2>
                <div class=css::options role="radiogroup">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            let theme = theme.clone();
                            let icon = match option {
                                Theme::Light => ic::SUN,
                                Theme::Dark => ic::MOON,
                                Theme::System => ic::MONITOR,
                            };
                            view! {
                                <button
                                    role="radio"
                                    aria-checked=move || (current.get() == option).to_string()
                                    class=move || if current.get() == option {
                                        format!("{} {}", css::option, css::selected)
                                    } else {
                                        css::option.to_string()
                                    }
                                    on:click=move |_| {
                                        if current.get_untracked() != option {
                                            theme.set(option);
                                            toasts.success(format!("Theme set to {}", option.label()));
                                        }
                                    }
                                >
                                    <Icon icon=icon />
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
