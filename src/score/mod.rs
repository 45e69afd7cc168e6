//! SEO scoring engine
//!
//! Pure function pipeline: normalize a raw domain string, compute the five
//! metric scores, aggregate, and derive insights. No I/O lives here.

pub mod insights;
pub mod metrics;
pub mod normalize;

// Re-export main functionality
pub use insights::{generate_insights, Insights};
pub use metrics::compute_metrics;
pub use normalize::normalize;

/// Fixed list of common industry/tech/marketing keyword terms
///
/// Shared by the keyword predicate, keyword-placement scoring and several
/// insight rules.
pub const SEO_KEYWORDS: &[&str] = &[
    "seo", "web", "app", "tech", "digital", "online", "shop", "store", "blog",
    "news", "media", "market", "data", "cloud", "smart", "pro", "hub", "zone",
    "spot", "site", "portal", "expert", "solutions", "services", "agency",
    "studio", "design", "dev", "code", "ai",
];

/// Check whether a domain name carries any SEO keyword
///
/// A keyword counts when it appears as a substring, or as an exact segment
/// when the name is split on `-` or `.`.
pub fn has_seo_keyword(name: &str) -> bool {
    SEO_KEYWORDS.iter().any(|keyword| {
        name.contains(keyword)
            || name.split('-').any(|segment| segment == *keyword)
            || name.split('.').any(|segment| segment == *keyword)
    })
}

/// Check whether a single segment is exactly an SEO keyword
pub(crate) fn is_seo_keyword(segment: &str) -> bool {
    SEO_KEYWORDS.contains(&segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_substring_match() {
        assert!(has_seo_keyword("myseoapp"));
        assert!(has_seo_keyword("site123"));
        assert!(!has_seo_keyword("example"));
        assert!(!has_seo_keyword("short"));
    }

    #[test]
    fn test_keyword_segment_match() {
        assert!(has_seo_keyword("myseo-app"));
        assert!(has_seo_keyword("best.shop"));
    }

    #[test]
    fn test_exact_segment_check() {
        assert!(is_seo_keyword("app"));
        assert!(!is_seo_keyword("myseo"));
        assert!(!is_seo_keyword("averylongdomainnameexample"));
    }
}
