//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`], [`Page`], [`ROUTES`] - Path-based navigation
//! - [`Theme`] - Display theme values
//! - [`MountFlag`], [`VisibilityLatch`], [`Motion`] - Animation state
//! - [`Toast`], [`ToastQueue`] - Notification queue
//! - [`LookupRequest`], [`StatsSnapshot`], ... - DNS API payloads

mod dns;
mod motion;
mod route;
mod theme;
mod toast;

pub use dns::{
    DashboardStats, DnsRecord, DomainCount, LookupRequest, LookupResponse, RecordType,
    StatsSnapshot, ThreatVerdict, TrendPoint, validate_domain,
};
pub use motion::{LatchState, MountFlag, MountPhase, Motion, Pose, Transition, VisibilityLatch};
pub use route::{AppRoute, Page, ROUTES, Route, normalize_path, resolve};
pub use theme::{Theme, UnknownTheme};
pub use toast::{Toast, ToastKind, ToastPosition, ToastQueue};
