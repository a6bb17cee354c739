//! Core logic independent of any particular view.
//!
//! This module provides:
//! - [`QueryClient`] keyed cache with retry policy
//! - [`ThemeContext`] theme persistence and publication
//! - [`Api`] typed wrappers for the backend endpoints

pub mod api;
pub mod error;
pub mod query;
pub mod theme;

pub use api::Api;
pub use query::{QueryClient, QueryKey, QueryOptions, RetryDelay};
pub use theme::{BrowserStorage, MemoryStorage, ThemeContext, ThemeStorage};
