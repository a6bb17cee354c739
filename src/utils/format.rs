//! Formatting utilities for counters, durations, and percentages.

/// Compact counter for stat cards (e.g., "950", "1.2K", "3.4M", "2.1B").
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000_000 {
        format!("{:.1}B", value as f64 / 1_000_000_000.0)
    } else if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Response time with a unit that keeps 2-3 significant digits
/// (e.g., "0.42 ms", "12.5 ms", "1.20 s").
pub fn format_latency(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.2} s", ms / 1000.0)
    } else if ms >= 10.0 {
        format!("{:.1} ms", ms)
    } else {
        format!("{:.2} ms", ms)
    }
}

/// Percentage with one decimal (e.g., "87.5%").
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1500), "1.5K");
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(2_100_000_000), "2.1B");
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(format_latency(0.42), "0.42 ms");
        assert_eq!(format_latency(12.54), "12.5 ms");
        assert_eq!(format_latency(1200.0), "1.20 s");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(87.5), "87.5%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
