//! Typed client for the Bhai Ka DNS HTTP API.
//!
//! Each function builds the endpoint URL from the configured base and
//! returns the decoded payload; caching and retries are the query client's
//! job, not this module's.

use serde::{Deserialize, Serialize};

use crate::config::endpoints;
use crate::core::error::FetchError;
use crate::core::query::QueryKey;
use crate::models::{
    DashboardStats, LookupRequest, LookupResponse, RecordType, StatsSnapshot, TrendPoint,
};
use crate::utils::{get_json, post_json};

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Endpoint URLs relative to one base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Api {
    base_url: &'static str,
}

impl Api {
    pub const fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn health(self) -> Result<Health, FetchError> {
        get_json(&self.url(endpoints::HEALTH)).await
    }

    pub async fn lookup(self, request: LookupRequest) -> Result<LookupResponse, FetchError> {
        post_json(&self.url(endpoints::DNS_LOOKUP), &request).await
    }

    pub async fn stats(self) -> Result<StatsSnapshot, FetchError> {
        get_json(&self.url(endpoints::ANALYTICS_STATS)).await
    }

    pub async fn dashboard(self) -> Result<DashboardStats, FetchError> {
        get_json(&self.url(endpoints::ANALYTICS_DASHBOARD)).await
    }

    pub async fn trends(self) -> Result<Vec<TrendPoint>, FetchError> {
        get_json(&self.url(endpoints::ANALYTICS_TRENDS)).await
    }
}

/// Cache keys for the queries above.
pub mod keys {
    use super::*;

    pub fn health() -> QueryKey {
        QueryKey::new(["health"])
    }

    pub fn stats() -> QueryKey {
        QueryKey::new(["analytics", "stats"])
    }

    pub fn dashboard() -> QueryKey {
        QueryKey::new(["analytics", "dashboard"])
    }

    pub fn trends() -> QueryKey {
        QueryKey::new(["analytics", "trends"])
    }

    pub fn lookup(domain: &str, record_type: RecordType) -> QueryKey {
        QueryKey::new(["lookup", domain, record_type.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        assert_eq!(Api::new("").url("/health"), "/health");
        assert_eq!(
            Api::new("https://dns.example/").url(endpoints::DNS_LOOKUP),
            "https://dns.example/api/dns/lookup"
        );
    }

    #[test]
    fn test_lookup_keys_are_distinct_per_record_type() {
        assert_ne!(
            keys::lookup("example.com", RecordType::A),
            keys::lookup("example.com", RecordType::Mx)
        );
        assert_eq!(keys::stats().to_string(), "analytics/stats");
    }
}
