//! Bhai Ka DNS web front-end.
//!
//! Client-side rendered Leptos application: a routed single-page shell, a
//! query client with retry and caching for the resolver API, a persisted
//! theme, toast notifications and the animated landing page.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext, use_app};
