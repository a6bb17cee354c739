use bhai_dns_web::App;
use bhai_dns_web::utils::logging;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting application");
    mount_to(root, App).forget();
}
