//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{ScrollBehavior, ScrollToOptions, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Scroll the page back to the top after a navigation.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Scroll the element with `id` into view, if it exists.
pub fn scroll_to_id(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

/// Replace the `light`/`dark` class on the `<html>` element.
pub fn set_root_theme_class(class: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(class);
    }
}

/// Random number in `[0, 1)` from the JS engine.
#[inline]
pub fn random() -> f64 {
    js_sys::Math::random()
}
