//! Path-based routing for the top-level views.

/// Top-level screens reachable through the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Dashboard,
    Docs,
    Analytics,
    Settings,
}

impl Page {
    /// Navbar label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Dashboard => "Dashboard",
            Self::Docs => "Docs",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Registered path of this page.
    pub fn path(self) -> &'static str {
        ROUTES
            .iter()
            .find(|route| route.page == self)
            .map(|route| route.path)
            .unwrap_or("/")
    }
}

/// Immutable pairing of a path and the view it selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// Route table, fixed at build time. First match wins.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        page: Page::Landing,
    },
    Route {
        path: "/dashboard",
        page: Page::Dashboard,
    },
    Route {
        path: "/docs",
        page: Page::Docs,
    },
    Route {
        path: "/analytics",
        page: Page::Analytics,
    },
    Route {
        path: "/settings",
        page: Page::Settings,
    },
];

/// Normalize a location into the form stored in [`ROUTES`].
///
/// Drops the query string and fragment, strips trailing slashes (the root
/// stays `/`) and guarantees a leading slash.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Resolve a path against the route table.
///
/// Matching is ASCII case-insensitive on the normalized path.
pub fn resolve(path: &str) -> Option<Page> {
    let normalized = normalize_path(path);
    ROUTES
        .iter()
        .find(|route| route.path.eq_ignore_ascii_case(&normalized))
        .map(|route| route.page)
}

/// Current application route. Total over all paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// A registered top-level view.
    Page(Page),
    /// No route matched; carries the normalized path for display.
    NotFound { path: String },
}

impl AppRoute {
    /// Parse a browser path into a route.
    pub fn from_path(path: &str) -> Self {
        match resolve(path) {
            Some(page) => Self::Page(page),
            None => Self::NotFound {
                path: normalize_path(path),
            },
        }
    }

    /// Path written to the address bar for this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Page(page) => page.path().to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// The matched page, if any.
    pub fn page(&self) -> Option<Page> {
        match self {
            Self::Page(page) => Some(*page),
            Self::NotFound { .. } => None,
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }

    /// Update browser URL to match this route (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let path = self.to_path();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

impl From<Page> for AppRoute {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_path_resolves_to_its_page() {
        assert_eq!(resolve("/"), Some(Page::Landing));
        assert_eq!(resolve("/dashboard"), Some(Page::Dashboard));
        assert_eq!(resolve("/docs"), Some(Page::Docs));
        assert_eq!(resolve("/analytics"), Some(Page::Analytics));
        assert_eq!(resolve("/settings"), Some(Page::Settings));
    }

    #[test]
    fn test_paths_are_disjoint() {
        for route in ROUTES {
            let matches = ROUTES
                .iter()
                .filter(|other| other.path.eq_ignore_ascii_case(route.path))
                .count();
            assert_eq!(matches, 1, "{} registered more than once", route.path);
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/docs/"), "/docs");
        assert_eq!(normalize_path("docs"), "/docs");
        assert_eq!(normalize_path("/analytics?range=7d"), "/analytics");
        assert_eq!(normalize_path("/settings#theme"), "/settings");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("/Dashboard"), Some(Page::Dashboard));
        assert_eq!(resolve("/DOCS/"), Some(Page::Docs));
    }

    #[test]
    fn test_unregistered_paths_are_not_found() {
        assert_eq!(resolve("/pricing"), None);
        assert_eq!(resolve("/docs/api"), None);
        assert_eq!(
            AppRoute::from_path("/pricing/"),
            AppRoute::NotFound {
                path: "/pricing".to_string()
            }
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(AppRoute::Page(Page::Landing).to_path(), "/");
        assert_eq!(AppRoute::Page(Page::Analytics).to_path(), "/analytics");
        assert_eq!(
            AppRoute::NotFound {
                path: "/nope".to_string()
            }
            .to_path(),
            "/nope"
        );
    }

    #[test]
    fn test_page_path_round_trips_through_table() {
        for route in ROUTES {
            assert_eq!(AppRoute::from_path(route.page.path()).page(), Some(route.page));
        }
    }
}
