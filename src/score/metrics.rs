//! Metric calculators and score aggregation
//!
//! Every calculator is a total function over a normalized domain; none can
//! fail. Scores are only floored where the formulas say so (see DESIGN.md
//! for the clamping decision).

use crate::score::{has_seo_keyword, is_seo_keyword};
use crate::types::{NormalizedDomain, SeoMetrics};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Aggregation weights: length/brandability/placement/extension at 0.15,
/// keywords and memorability at 0.20.
const WEIGHT_LENGTH: f64 = 0.15;
const WEIGHT_KEYWORDS: f64 = 0.20;
const WEIGHT_MEMORABILITY: f64 = 0.20;
const WEIGHT_BRANDABILITY: f64 = 0.15;
const WEIGHT_PLACEMENT: f64 = 0.15;
const WEIGHT_EXTENSION: f64 = 0.15;

/// Compute all metrics for a normalized domain
pub fn compute_metrics(domain: &NormalizedDomain) -> SeoMetrics {
    let length = length_score(&domain.name);
    let has_keywords = has_seo_keyword(&domain.name);
    let memorability = memorability_score(&domain.name);
    let brandability = brandability_score(&domain.name);
    let keyword_placement = keyword_placement_score(&domain.name);
    let domain_extension = extension_score(&domain.extension);

    let overall_score = overall_score(
        length,
        has_keywords,
        memorability,
        brandability,
        keyword_placement,
        domain_extension,
    );

    SeoMetrics {
        length,
        has_keywords,
        memorability,
        brandability,
        keyword_placement,
        domain_extension,
        overall_score,
    }
}

/// Length score: the sweet spot [6,14] scores 10 exactly
///
/// Short names bottom out at 5; long names decay by half a point per extra
/// character with a floor of 1.
pub fn length_score(name: &str) -> f64 {
    let len = name.chars().count() as f64;
    if (6.0..=14.0).contains(&len) {
        10.0
    } else if len < 6.0 {
        len.max(5.0)
    } else {
        (14.0 - (len - 14.0) * 0.5).max(1.0)
    }
}

/// Memorability score from hyphen/digit counts and vowel balance
///
/// A vowel/consonant ratio inside [0.4, 0.6] is neutral; outside the band
/// the ratio term costs 2 points per 0.1 of deviation (scaled by 0.2 in the
/// combination, unfloored).
pub fn memorability_score(name: &str) -> f64 {
    let len = name.chars().count() as i64;
    let hyphens = name.chars().filter(|c| *c == '-').count() as i64;
    let digits = name.chars().filter(|c| c.is_ascii_digit()).count() as i64;
    let vowels = name.chars().filter(|c| VOWELS.contains(c)).count() as i64;
    let consonants = len - vowels - hyphens - digits;

    let ratio = vowels as f64 / consonants.max(1) as f64;
    let ratio_score = if (0.4..=0.6).contains(&ratio) {
        10.0
    } else {
        let deviation = if ratio < 0.4 { 0.4 - ratio } else { ratio - 0.6 };
        10.0 - deviation * 20.0
    };
    let ratio_component = ratio_score - 10.0;

    let hyphen_penalty = (hyphens as f64 * 1.5).min(5.0);
    let digit_penalty = (digits as f64).min(5.0);

    (10.0 - hyphen_penalty * 0.5 - digit_penalty * 0.3 + ratio_component * 0.2).max(1.0)
}

/// Brandability score: uniqueness, length band and character cleanliness
///
/// Weighted 0.4/0.3/0.3 and floored at 1 after combination only.
pub fn brandability_score(name: &str) -> f64 {
    let len = name.chars().count();
    let has_digit = name.chars().any(|c| c.is_ascii_digit());
    let has_special = name.chars().any(|c| !c.is_ascii_alphanumeric() && c != '-');

    // Generic words score higher than stuffed keywords
    let uniqueness: f64 = if name.split('-').any(is_seo_keyword) { 6.0 } else { 10.0 };
    let length_component = if len > 3 && len < 12 { 10.0 } else { 5.0 };
    let cleanliness = 10.0 - if has_digit { 3.0 } else { 0.0 } - if has_special { 5.0 } else { 0.0 };

    (uniqueness * 0.4 + length_component * 0.3 + cleanliness * 0.3).max(1.0)
}

/// Keyword placement score: earlier segments are worth more
///
/// Splits on `-`, `_` and `.`; the first segment that is exactly an SEO
/// keyword at index i yields `10 - 2*i` (negative for i >= 6, on purpose).
/// No keyword segment at all scores a flat 3.
pub fn keyword_placement_score(name: &str) -> f64 {
    name.split(['-', '_', '.'])
        .enumerate()
        .find(|(_, segment)| is_seo_keyword(segment))
        .map(|(index, _)| 10.0 - 2.0 * index as f64)
        .unwrap_or(3.0)
}

/// Extension score by static TLD table; unknown TLDs default to 5
pub fn extension_score(extension: &str) -> f64 {
    match extension {
        "com" => 10.0,
        "app" | "ai" => 9.0,
        "org" | "io" | "dev" | "tech" => 8.0,
        "net" | "co" | "digital" | "agency" | "store" | "shop" => 7.0,
        _ => 5.0,
    }
}

/// Weighted aggregate, rounded to the nearest integer
///
/// The keyword predicate contributes 7 when true and 3 when false. No clamp
/// is applied after rounding.
pub fn overall_score(
    length: f64,
    has_keywords: bool,
    memorability: f64,
    brandability: f64,
    keyword_placement: f64,
    extension: f64,
) -> i32 {
    let keyword_component = if has_keywords { 7.0 } else { 3.0 };
    (length * WEIGHT_LENGTH
        + keyword_component * WEIGHT_KEYWORDS
        + memorability * WEIGHT_MEMORABILITY
        + brandability * WEIGHT_BRANDABILITY
        + keyword_placement * WEIGHT_PLACEMENT
        + extension * WEIGHT_EXTENSION)
        .round() as i32
}
