//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`. The
//! [`AppConfig`] value bundles the runtime-relevant subset so it can be
//! injected once at the root instead of read ad hoc.

use crate::core::query::{QueryOptions, RetryDelay};
use crate::models::{Theme, ToastPosition};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// API documentation rendered by the docs view.
pub const DOCS_MARKDOWN: &str = include_str!("../assets/text/docs.md");

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name displayed in the navbar and hero.
pub const APP_NAME: &str = "Bhai Ka DNS";

/// Hero tagline.
pub const APP_TAGLINE: &str = "AI-Powered DNS with Next-Gen Security";

/// Hero description paragraph.
pub const APP_DESCRIPTION: &str = "Experience lightning-fast DNS resolution powered by advanced AI \
     algorithms for threat detection, smart caching, and intelligent domain analysis.";

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key the theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "bhai-dns-theme";

/// Theme applied when nothing valid is persisted.
pub const DEFAULT_THEME: Theme = Theme::Dark;

/// Media query used to resolve [`Theme::System`].
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Network Configuration
// =============================================================================

/// Prefix for API requests. Empty means same origin.
pub const API_BASE_URL: &str = "";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// API endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const DNS_LOOKUP: &str = "/api/dns/lookup";
    pub const ANALYTICS_STATS: &str = "/api/analytics/stats";
    pub const ANALYTICS_DASHBOARD: &str = "/api/analytics/dashboard";
    pub const ANALYTICS_TRENDS: &str = "/api/analytics/trends";
}

// =============================================================================
// Query Client Configuration
// =============================================================================

/// Retries allowed per failed query under the app-wide policy.
pub const QUERY_RETRY: u32 = 1;

/// Whether queries refetch when the window regains focus.
pub const QUERY_REFETCH_ON_WINDOW_FOCUS: bool = false;

/// Freshness window for lookup results; repeated lookups inside it are
/// served from the cache.
pub const LOOKUP_STALE_MS: f64 = 60_000.0;

/// Upper bound for exponential retry backoff.
pub const MAX_RETRY_DELAY_MS: u32 = 30_000;

// =============================================================================
// Notification Configuration
// =============================================================================

/// Toast placement on screen.
pub const TOAST_POSITION: ToastPosition = ToastPosition::TopRight;

/// Time before a toast dismisses itself.
pub const TOAST_DURATION_MS: u32 = 4000;

/// Maximum number of toasts rendered at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// =============================================================================
// Animation Configuration
// =============================================================================

/// Motion timings for the shell and landing page (milliseconds).
pub mod motion {
    /// Page-level fade wrapping every routed view.
    pub const SHELL_FADE: u32 = 500;
    /// Hero text blocks.
    pub const HERO_BLOCK: u32 = 600;
    /// Delay of the second hero block.
    pub const HERO_STAGGER: u32 = 200;
    /// Delay of the live stats section.
    pub const STATS_DELAY: u32 = 200;
    /// Lookup tool reveal.
    pub const LOOKUP_REVEAL: u32 = 600;
    /// Feature grid section reveal.
    pub const FEATURES_REVEAL: u32 = 800;
    /// Individual feature card reveal.
    pub const FEATURE_CARD: u32 = 500;
    /// Per-card stagger in the feature grid.
    pub const FEATURE_CARD_STAGGER: u32 = 100;
    /// Call-to-action reveal.
    pub const CTA_REVEAL: u32 = 600;
    /// Number of decorative particles behind the hero.
    pub const PARTICLE_COUNT: usize = 20;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Configuration object constructed once at start-up and handed to the
/// application context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub theme_storage_key: &'static str,
    pub default_theme: Theme,
    pub api_base_url: &'static str,
    pub query_defaults: QueryOptions,
    pub toast_position: ToastPosition,
    pub toast_duration_ms: u32,
    pub max_visible_toasts: usize,
}

impl AppConfig {
    /// Build the configuration from the compile-time constants.
    pub fn from_constants() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY,
            default_theme: DEFAULT_THEME,
            api_base_url: API_BASE_URL,
            query_defaults: QueryOptions::default()
                .with_retry(QUERY_RETRY)
                .with_refetch_on_window_focus(QUERY_REFETCH_ON_WINDOW_FOCUS)
                .with_retry_delay(RetryDelay::Exponential {
                    max_ms: MAX_RETRY_DELAY_MS,
                }),
            toast_position: TOAST_POSITION,
            toast_duration_ms: TOAST_DURATION_MS,
            max_visible_toasts: MAX_VISIBLE_TOASTS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_constants()
    }
}
