//! View shell.
//!
//! Persistent navbar plus the routed view slot, faded in once when the
//! application mounts.

use leptos::prelude::*;

use crate::components::hooks::use_mount_flag;
use crate::components::navbar::Navbar;
use crate::config::motion;
use crate::models::{Motion, Transition};

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Fixed fade applied around every routed view.
const SHELL_FADE: Motion = Motion::fade(Transition::tween(motion::SHELL_FADE));

#[component]
pub fn ViewShell(children: Children) -> impl IntoView {
    let mounted = use_mount_flag();

    view! {
        <div class=css::shell style=move || SHELL_FADE.style(mounted.get())>
            <Navbar />
            <main class=css::main>{children()}</main>
        </div>
    }
}
