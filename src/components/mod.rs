//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`shell`] - Navbar plus routed view slot
//! - [`landing`] - Marketing landing page with the lookup tool
//! - [`pages`] - Dashboard, docs, analytics, settings and not found views
//! - [`motion`] - Mount and scroll-reveal animation wrappers
//! - [`hooks`] - Mount flag, visibility latch and query bindings
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toaster`] - Toast notification stack

pub mod hooks;
pub mod icons;
pub mod landing;
pub mod motion;
pub mod navbar;
pub mod pages;
pub mod router;
pub mod shell;
pub mod toaster;

pub use router::AppRouter;
pub use toaster::Toaster;
