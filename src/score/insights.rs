//! Insight generation
//!
//! Deterministic threshold rules over the computed metrics. Thresholds
//! compare metric scores, not raw character counts. Each fired item carries
//! its category, display text and a detail paragraph.

use crate::types::{Insight, InsightCategory, NormalizedDomain, SeoMetrics};

/// The three parallel insight lists for one analyzed domain
#[derive(Debug, Clone, Default)]
pub struct Insights {
    pub recommendations: Vec<Insight>,
    pub strengths: Vec<Insight>,
    pub weaknesses: Vec<Insight>,
}

/// Derive recommendations, strengths and weaknesses from the metrics
pub fn generate_insights(domain: &NormalizedDomain, metrics: &SeoMetrics) -> Insights {
    let mut insights = Insights::default();
    push_recommendations(domain, metrics, &mut insights.recommendations);
    push_strengths(domain, metrics, &mut insights.strengths);
    push_weaknesses(domain, metrics, &mut insights.weaknesses);
    insights
}

fn push_recommendations(
    domain: &NormalizedDomain,
    metrics: &SeoMetrics,
    out: &mut Vec<Insight>,
) {
    // The <7 / >9 pair cannot both fire
    if metrics.length < 7.0 {
        out.push(Insight::new(
            InsightCategory::Length,
            "Consider a longer domain name",
            "Very short names score poorly; 6-14 characters is the sweet spot for recall and search display.",
        ));
    }
    if metrics.length > 9.0 {
        out.push(Insight::new(
            InsightCategory::Length,
            "Consider a shorter domain name",
            "Trimming the name keeps it easy to type and reduces truncation in search results.",
        ));
    }
    if !metrics.has_keywords {
        out.push(Insight::new(
            InsightCategory::Keywords,
            "Include relevant keywords in your domain",
            "A recognizable industry term in the name helps search engines connect the domain to its topic.",
        ));
    }
    if metrics.memorability < 7.0 {
        out.push(Insight::new(
            InsightCategory::Memorability,
            "Make the domain easier to remember",
            "Fewer hyphens and digits and a balanced vowel mix make a name stick.",
        ));
    }
    if metrics.brandability < 7.0 {
        out.push(Insight::new(
            InsightCategory::Brandability,
            "Strengthen the branding potential",
            "Distinctive, clean names without digits or special characters build stronger brands.",
        ));
    }
    if metrics.keyword_placement < 5.0 && metrics.has_keywords {
        out.push(Insight::new(
            InsightCategory::KeywordPlacement,
            "Move keywords closer to the front",
            "Search engines weigh the leading segments of a domain more heavily.",
        ));
    }
    if metrics.domain_extension < 8.0 && domain.extension != "com" {
        out.push(Insight::new(
            InsightCategory::Extension,
            "Consider a .com domain",
            ".com remains the most trusted and best-recalled extension.",
        ));
    }
    if metrics.overall_score as f64 >= 8.5 {
        out.push(Insight::new(
            InsightCategory::Overall,
            "Great choice! This domain scores well across the board",
            "Strong metrics on every axis; register it before someone else does.",
        ));
    }
}

fn push_strengths(domain: &NormalizedDomain, metrics: &SeoMetrics, out: &mut Vec<Insight>) {
    if metrics.length >= 7.0 {
        out.push(Insight::new(
            InsightCategory::Length,
            "Good domain length",
            "The name sits in a comfortable length range for typing and recall.",
        ));
    }
    if metrics.has_keywords {
        out.push(Insight::new(
            InsightCategory::Keywords,
            "Contains relevant keywords",
            "An industry term in the name gives search engines a topical signal.",
        ));
    }
    if metrics.memorability >= 8.0 {
        out.push(Insight::new(
            InsightCategory::Memorability,
            "Easy to remember",
            "Clean character mix with a natural vowel balance.",
        ));
    }
    if metrics.brandability >= 8.0 {
        out.push(Insight::new(
            InsightCategory::Brandability,
            "Strong branding potential",
            "Distinctive and clean enough to build a brand identity around.",
        ));
    }
    if metrics.keyword_placement >= 8.0 {
        out.push(Insight::new(
            InsightCategory::KeywordPlacement,
            "Keywords in prime position",
            "Keyword appears in the leading segments where it carries the most weight.",
        ));
    }
    // Premium and solid are mutually exclusive
    if metrics.domain_extension >= 9.0 {
        out.push(Insight::new(
            InsightCategory::Extension,
            "Premium domain extension",
            "Top-tier extension with strong user trust.",
        ));
    } else if metrics.domain_extension >= 7.0 {
        out.push(Insight::new(
            InsightCategory::Extension,
            "Solid domain extension",
            "Well-established extension that users recognize.",
        ));
    }
    if domain.extension == "com" {
        out.push(Insight::new(
            InsightCategory::Extension,
            "Uses .com extension",
            ".com is the default extension users type when guessing an address.",
        ));
    }
}

fn push_weaknesses(domain: &NormalizedDomain, metrics: &SeoMetrics, out: &mut Vec<Insight>) {
    if metrics.length < 5.0 {
        out.push(Insight::new(
            InsightCategory::Length,
            "Domain may be too short",
            "Very short names carry little meaning and are usually taken or expensive.",
        ));
    }
    if metrics.length > 12.0 {
        out.push(Insight::new(
            InsightCategory::Length,
            "Domain may be too long",
            "Long names are harder to type and get truncated in listings.",
        ));
    }
    if !metrics.has_keywords {
        out.push(Insight::new(
            InsightCategory::Keywords,
            "No relevant keywords",
            "Without an industry term the domain gives search engines no topical hint.",
        ));
    }
    if metrics.memorability < 6.0 {
        out.push(Insight::new(
            InsightCategory::Memorability,
            "Difficult to remember",
            "Hyphens, digits or an awkward vowel balance make the name hard to recall.",
        ));
    }
    if metrics.brandability < 6.0 {
        out.push(Insight::new(
            InsightCategory::Brandability,
            "Limited branding potential",
            "Generic or cluttered names are hard to build a distinctive brand on.",
        ));
    }
    if metrics.keyword_placement < 5.0 && metrics.has_keywords {
        out.push(Insight::new(
            InsightCategory::KeywordPlacement,
            "Keywords poorly positioned",
            "The keyword sits too deep in the name to carry much search weight.",
        ));
    }
    if metrics.domain_extension < 7.0 {
        out.push(Insight::new(
            InsightCategory::Extension,
            "Weak domain extension",
            "Uncommon extensions reduce user trust and recall.",
        ));
    }
    if domain.name.contains('-') {
        out.push(Insight::new(
            InsightCategory::Hyphens,
            "Contains hyphens",
            "Hyphens are easy to forget and often associated with spammy domains.",
        ));
    }
    if domain.name.chars().any(|c| c.is_ascii_digit()) {
        out.push(Insight::new(
            InsightCategory::Digits,
            "Contains numbers",
            "Digits are ambiguous when spoken aloud (1 vs one) and hurt recall.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{compute_metrics, normalize};

    fn insights_for(raw: &str) -> Insights {
        let domain = normalize(raw).unwrap();
        let metrics = compute_metrics(&domain);
        generate_insights(&domain, &metrics)
    }

    fn texts(list: &[Insight]) -> Vec<&str> {
        list.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_com_extension_strength() {
        let insights = insights_for("example.com");
        assert!(texts(&insights.strengths).contains(&"Uses .com extension"));
        assert!(texts(&insights.strengths).contains(&"Premium domain extension"));
    }

    #[test]
    fn test_premium_and_solid_are_exclusive() {
        let io = insights_for("example.io");
        let io_texts = texts(&io.strengths);
        assert!(io_texts.contains(&"Solid domain extension"));
        assert!(!io_texts.contains(&"Premium domain extension"));

        let com = insights_for("example.com");
        let com_texts = texts(&com.strengths);
        assert!(com_texts.contains(&"Premium domain extension"));
        assert!(!com_texts.contains(&"Solid domain extension"));
    }

    #[test]
    fn test_hyphen_and_digit_weaknesses() {
        let insights = insights_for("https://www.myseo-app.io/page");
        assert!(texts(&insights.weaknesses).contains(&"Contains hyphens"));

        let insights = insights_for("site123.net");
        assert!(texts(&insights.weaknesses).contains(&"Contains numbers"));
    }

    #[test]
    fn test_missing_keywords_fires_both_lists() {
        let insights = insights_for("example.com");
        assert!(texts(&insights.recommendations)
            .contains(&"Include relevant keywords in your domain"));
        assert!(texts(&insights.weaknesses).contains(&"No relevant keywords"));
    }

    #[test]
    fn test_short_name_recommendation() {
        // "ab.co": length score 5 -> longer-name recommendation, not shorter
        let insights = insights_for("ab.co");
        let recs = texts(&insights.recommendations);
        assert!(recs.contains(&"Consider a longer domain name"));
        assert!(!recs.contains(&"Consider a shorter domain name"));
    }

    #[test]
    fn test_non_com_extension_recommendation() {
        let insights = insights_for("site123.net");
        assert!(texts(&insights.recommendations).contains(&"Consider a .com domain"));

        let insights = insights_for("example.com");
        assert!(!texts(&insights.recommendations).contains(&"Consider a .com domain"));
    }

    #[test]
    fn test_every_insight_has_category_and_detail() {
        let insights = insights_for("myseo-app.io");
        for insight in insights
            .recommendations
            .iter()
            .chain(&insights.strengths)
            .chain(&insights.weaknesses)
        {
            assert!(insight.detail.is_some(), "missing detail: {}", insight.text);
        }
    }

    #[test]
    fn test_keyword_placement_strength() {
        // "seo-tools.com": keyword at index 0 -> placement 10
        let insights = insights_for("seo-tools.com");
        assert!(texts(&insights.strengths).contains(&"Keywords in prime position"));
    }
}
