//! Request and response types exchanged with the DNS API.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;

/// Maximum presentation length of a domain name.
const MAX_DOMAIN_LEN: usize = 253;

/// Letters, digits and inner hyphens, 1-63 characters.
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").expect("valid label regex")
});

/// Record types offered by the lookup tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    #[default]
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
}

impl RecordType {
    pub const ALL: [RecordType; 6] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Txt,
        RecordType::Ns,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownRecordType(s.to_string()))
    }
}

/// Normalize and validate user input as a domain name.
///
/// Lowercases, strips one trailing dot and checks each label.
pub fn validate_domain(input: &str) -> Result<String, ValidationError> {
    let domain = input.trim().trim_end_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return Err(ValidationError::EmptyDomain);
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(ValidationError::DomainTooLong);
    }
    if let Some(bad) = domain.split('.').find(|label| !LABEL_RE.is_match(label)) {
        return Err(ValidationError::InvalidLabel(bad.to_string()));
    }
    Ok(domain)
}

/// Body of `POST /api/dns/lookup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub domain: String,
    pub record_type: RecordType,
}

/// A single answer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub name: String,
    pub record_type: String,
    pub value: String,
    #[serde(default)]
    pub ttl: u32,
}

/// Threat classification attached to a lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreatVerdict {
    pub is_malicious: bool,
    #[serde(default)]
    pub threat_type: Option<String>,
    #[serde(default)]
    pub confidence: f64,
}

/// Response of `POST /api/dns/lookup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub domain: String,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
    #[serde(default)]
    pub response_time_ms: f64,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub threat: Option<ThreatVerdict>,
}

/// Server counters from `GET /api/analytics/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub threats_blocked: u64,
    pub ai_suggestions: u64,
    pub errors: u64,
    pub average_response_time: f64,
}

impl StatsSnapshot {
    /// Cache hit ratio in percent; zero when no queries were served.
    pub fn cache_hit_rate(&self) -> f64 {
        if self.total_queries == 0 {
            0.0
        } else {
            self.cache_hits as f64 * 100.0 / self.total_queries as f64
        }
    }
}

/// A domain and how often it was queried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

/// Payload of `GET /api/analytics/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub stats: StatsSnapshot,
    pub top_domains: Vec<DomainCount>,
    pub blocked_domains: Vec<DomainCount>,
}

/// One bucket of `GET /api/analytics/trends`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: String,
    #[serde(default)]
    pub queries: u64,
    #[serde(default)]
    pub threats: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_normalizes() {
        assert_eq!(validate_domain("  Example.COM. "), Ok("example.com".to_string()));
        assert_eq!(validate_domain("a-b.c0.io"), Ok("a-b.c0.io".to_string()));
    }

    #[test]
    fn test_validate_domain_rejects() {
        assert_eq!(validate_domain("   "), Err(ValidationError::EmptyDomain));
        assert_eq!(
            validate_domain("-bad.com"),
            Err(ValidationError::InvalidLabel("-bad".to_string()))
        );
        assert_eq!(
            validate_domain("double..dot"),
            Err(ValidationError::InvalidLabel(String::new()))
        );
        assert_eq!(
            validate_domain("under_score.com"),
            Err(ValidationError::InvalidLabel("under_score".to_string()))
        );
        let long_label = "a".repeat(64);
        assert!(validate_domain(&format!("{long_label}.com")).is_err());
        let long_name = vec!["abcdefghi"; 30].join(".");
        assert_eq!(validate_domain(&long_name), Err(ValidationError::DomainTooLong));
    }

    #[test]
    fn test_record_type_parse() {
        assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::Aaaa));
        assert_eq!(" MX ".parse::<RecordType>(), Ok(RecordType::Mx));
        assert!("SRV".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_lookup_request_wire_format() {
        let req = LookupRequest {
            domain: "example.com".to_string(),
            record_type: RecordType::Aaaa,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"domain":"example.com","record_type":"AAAA"}"#
        );
    }

    #[test]
    fn test_stats_tolerates_missing_fields() {
        let stats: StatsSnapshot = serde_json::from_str(r#"{"total_queries":200,"cache_hits":50}"#).unwrap();
        assert_eq!(stats.threats_blocked, 0);
        assert_eq!(stats.cache_hit_rate(), 25.0);
        assert_eq!(StatsSnapshot::default().cache_hit_rate(), 0.0);
    }
}
