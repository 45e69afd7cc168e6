//! Core types and structures for domain-lens

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// A cleaned domain split into its name and final label
///
/// Produced by [`crate::score::normalize`]. Multi-label TLDs are not
/// special-cased: `extension` is only the label after the last dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDomain {
    pub name: String,
    pub extension: String,
}

impl NormalizedDomain {
    /// Get the full domain name (`name.extension`)
    pub fn full_domain(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

impl std::fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.extension)
    }
}

/// The five heuristic metric scores plus the keyword predicate
///
/// Component scores are conceptually 1-10 but only floored where the
/// formulas say so; keyword placement can go negative for late matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoMetrics {
    pub length: f64,
    pub has_keywords: bool,
    pub memorability: f64,
    pub brandability: f64,
    pub keyword_placement: f64,
    pub domain_extension: f64,
    pub overall_score: i32,
}

/// Stable identifier for an insight trigger
///
/// Insight details are keyed by category rather than display text, so two
/// differently-worded insights can never overwrite each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Length,
    Keywords,
    Memorability,
    Brandability,
    KeywordPlacement,
    Extension,
    Hyphens,
    Digits,
    Overall,
}

impl std::fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightCategory::Length => write!(f, "length"),
            InsightCategory::Keywords => write!(f, "keywords"),
            InsightCategory::Memorability => write!(f, "memorability"),
            InsightCategory::Brandability => write!(f, "brandability"),
            InsightCategory::KeywordPlacement => write!(f, "keyword_placement"),
            InsightCategory::Extension => write!(f, "extension"),
            InsightCategory::Hyphens => write!(f, "hyphens"),
            InsightCategory::Digits => write!(f, "digits"),
            InsightCategory::Overall => write!(f, "overall"),
        }
    }
}

/// A single recommendation, strength or weakness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub text: String,
    pub detail: Option<String>,
}

impl Insight {
    pub fn new(
        category: InsightCategory,
        text: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            category,
            text: text.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Optional pricing/availability enrichment attached to an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPricing {
    pub available: bool,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub registrar: Option<String>,
}

/// Full analysis of one domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub domain: String,
    pub metrics: SeoMetrics,
    pub recommendations: Vec<Insight>,
    pub strengths: Vec<Insight>,
    pub weaknesses: Vec<Insight>,
    pub pricing: Option<DomainPricing>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Check whether a strength with the given display text fired
    pub fn has_strength(&self, text: &str) -> bool {
        self.strengths.iter().any(|s| s.text == text)
    }

    /// Check whether a weakness with the given display text fired
    pub fn has_weakness(&self, text: &str) -> bool {
        self.weaknesses.iter().any(|w| w.text == text)
    }
}

/// Result of comparing several candidate domains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainComparison {
    pub domains: Vec<AnalysisResult>,
    pub best_choice: String,
}

/// Configuration for domain analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    pub concurrent_analyses: usize,
    pub pricing_enabled: bool,
    pub pricing_timeout: Duration,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            concurrent_analyses: 10,
            pricing_enabled: true,
            pricing_timeout: Duration::from_secs(10),
        }
    }
}

/// Lock-free performance counters for the analyzer
#[derive(Debug, Default)]
pub struct AnalyzerMetrics {
    domains_analyzed: AtomicU64,
    enrichment_failures: AtomicU64,
    total_analysis_micros: AtomicU64,
}

impl AnalyzerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_domains_analyzed(&self) {
        self.domains_analyzed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_enrichment_failures(&self) {
        self.enrichment_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_analysis_time(&self, micros: u64) {
        self.total_analysis_micros.fetch_add(micros, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            domains_analyzed: self.domains_analyzed.load(Ordering::Relaxed),
            enrichment_failures: self.enrichment_failures.load(Ordering::Relaxed),
            total_analysis_micros: self.total_analysis_micros.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of analyzer metrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub domains_analyzed: u64,
    pub enrichment_failures: u64,
    pub total_analysis_micros: u64,
}

impl MetricsSnapshot {
    /// Average analysis time in milliseconds
    pub fn avg_analysis_time_ms(&self) -> f64 {
        if self.domains_analyzed == 0 {
            0.0
        } else {
            self.total_analysis_micros as f64 / self.domains_analyzed as f64 / 1000.0
        }
    }
}
