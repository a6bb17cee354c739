//! Utility modules for web, DOM, and networking operations.
//!
//! Provides:
//! - [`get_json`], [`post_json`] - Network fetching with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`format`] - Display formatting for stats
//! - [`logging`] - `tracing` output to the browser console
//! - [`time`] - Clock and sleep helpers usable from native tests

pub mod dom;
mod fetch;
pub mod format;
pub mod logging;
mod markdown;
pub mod time;

pub use fetch::{Method, get_json, post_json, with_timeout};
pub use markdown::markdown_to_html;
