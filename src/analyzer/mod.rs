//! Domain analyzer
//!
//! Runs the scoring pipeline end to end (normalize, metrics, insights,
//! optional pricing enrichment) and fans it out concurrently for
//! comparisons. Pricing providers live in a thread-safe registry with a
//! default and a fallback chain.

use crate::error::{DomainLensError, Result};
use crate::pricing::PricingProvider;
use crate::score::{compute_metrics, generate_insights, normalize};
use crate::types::{
    AnalysisResult, AnalyzeConfig, AnalyzerMetrics, DomainComparison, DomainPricing,
    MetricsSnapshot,
};
use chrono::Utc;
use futures::future::join_all;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::time::timeout;

/// Domain analyzer with pluggable pricing enrichment
#[derive(Clone)]
pub struct DomainAnalyzer {
    config: AnalyzeConfig,
    providers: Arc<RwLock<HashMap<String, Arc<dyn PricingProvider>>>>,
    default_provider: Arc<RwLock<String>>,
    semaphore: Arc<Semaphore>,
    metrics: Arc<AnalyzerMetrics>,
}

impl DomainAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::with_config(AnalyzeConfig::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: AnalyzeConfig) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.concurrent_analyses));
        Self {
            config,
            providers: Arc::new(RwLock::new(HashMap::new())),
            default_provider: Arc::new(RwLock::new("registrar".to_string())),
            semaphore,
            metrics: Arc::new(AnalyzerMetrics::new()),
        }
    }

    /// Add a pricing provider (thread-safe)
    pub fn add_provider(&self, provider: Arc<dyn PricingProvider>) {
        let name = provider.name().to_string();
        let mut providers = self.providers.write();
        providers.insert(name, provider);
    }

    /// Set the default pricing provider (thread-safe)
    pub fn set_default_provider(&self, provider: &str) {
        let providers = self.providers.read();
        if providers.contains_key(provider) {
            let mut default = self.default_provider.write();
            *default = provider.to_string();
        }
    }

    /// Get available provider names (thread-safe)
    pub fn available_providers(&self) -> Vec<String> {
        let providers = self.providers.read();
        providers.keys().cloned().collect()
    }

    /// Check if any pricing provider is configured
    pub fn has_pricing(&self) -> bool {
        let providers = self.providers.read();
        !providers.is_empty()
    }

    /// Get analyzer configuration
    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }

    /// Get current metrics snapshot
    pub fn get_metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }

    /// Analyze a single raw domain string
    ///
    /// Normalization failure propagates as `InvalidDomain`; enrichment
    /// failure is swallowed and the result comes back without pricing.
    pub async fn analyze(&self, raw: &str) -> Result<AnalysisResult> {
        let _permit = self.semaphore.acquire().await.map_err(|e| {
            DomainLensError::internal(format!("Failed to acquire semaphore: {}", e))
        })?;

        let start_time = Instant::now();

        let domain = normalize(raw)?;
        let metrics = compute_metrics(&domain);
        let insights = generate_insights(&domain, &metrics);
        let full_domain = domain.full_domain();

        let pricing = if self.config.pricing_enabled && self.has_pricing() {
            self.fetch_pricing_with_fallback(&full_domain).await
        } else {
            None
        };

        let duration = start_time.elapsed();
        self.metrics.increment_domains_analyzed();
        self.metrics.add_analysis_time(duration.as_micros() as u64);

        tracing::debug!(
            domain = %full_domain,
            overall_score = %metrics.overall_score,
            has_pricing = %pricing.is_some(),
            duration_us = %duration.as_micros(),
            "Domain analysis completed"
        );

        Ok(AnalysisResult {
            domain: full_domain,
            metrics,
            recommendations: insights.recommendations,
            strengths: insights.strengths,
            weaknesses: insights.weaknesses,
            pricing,
            analyzed_at: Utc::now(),
        })
    }

    /// Analyze multiple domains concurrently, preserving input order
    pub async fn analyze_all(&self, domains: &[String]) -> Result<Vec<AnalysisResult>> {
        let batch_start = Instant::now();
        let futures = domains.iter().map(|domain| self.analyze(domain));
        let results = join_all(futures).await;

        let mut analyses = Vec::with_capacity(results.len());
        for result in results {
            analyses.push(result?);
        }

        tracing::info!(
            domains_requested = %domains.len(),
            batch_duration_ms = %batch_start.elapsed().as_millis(),
            "Batch domain analysis completed"
        );

        Ok(analyses)
    }

    /// Compare candidate domains and pick the best by overall score
    ///
    /// Strict greater-than comparison in input order, so the earliest
    /// occurrence keeps the title on ties.
    pub async fn compare(&self, domains: &[String]) -> Result<DomainComparison> {
        if domains.is_empty() {
            return Err(DomainLensError::invalid_domain("", "domain list is empty"));
        }

        let analyses = self.analyze_all(domains).await?;

        let mut best_index = 0;
        for (index, analysis) in analyses.iter().enumerate() {
            if analysis.metrics.overall_score > analyses[best_index].metrics.overall_score {
                best_index = index;
            }
        }

        let best_choice = analyses[best_index].domain.clone();
        tracing::info!(
            candidates = %analyses.len(),
            best_choice = %best_choice,
            best_score = %analyses[best_index].metrics.overall_score,
            "Domain comparison completed"
        );

        Ok(DomainComparison {
            domains: analyses,
            best_choice,
        })
    }

    /// Try the default provider first, then any other registered provider
    ///
    /// Every failure is logged and swallowed; `None` means the analysis
    /// proceeds without enrichment.
    async fn fetch_pricing_with_fallback(&self, domain: &str) -> Option<DomainPricing> {
        let default_name = self.default_provider.read().clone();

        let mut ordered: Vec<Arc<dyn PricingProvider>> = Vec::new();
        {
            let providers = self.providers.read();
            if let Some(provider) = providers.get(&default_name) {
                ordered.push(provider.clone());
            }
            for (name, provider) in providers.iter() {
                if name != &default_name {
                    ordered.push(provider.clone());
                }
            }
        }

        for provider in ordered {
            match timeout(self.config.pricing_timeout, provider.fetch_pricing(domain)).await {
                Ok(Ok(pricing)) => {
                    tracing::debug!(
                        domain = %domain,
                        provider = %provider.name(),
                        available = %pricing.available,
                        "Pricing lookup completed"
                    );
                    return Some(pricing);
                }
                Ok(Err(e)) => {
                    tracing::debug!(
                        domain = %domain,
                        provider = %provider.name(),
                        error = %e,
                        "Pricing lookup failed"
                    );
                }
                Err(_) => {
                    tracing::debug!(
                        domain = %domain,
                        provider = %provider.name(),
                        timeout_secs = %self.config.pricing_timeout.as_secs(),
                        "Pricing lookup timed out"
                    );
                }
            }
        }

        self.metrics.increment_enrichment_failures();
        None
    }
}

impl Default for DomainAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::SeededPricingProvider;
    use async_trait::async_trait;

    /// Provider that always fails, for graceful-degradation tests
    struct FailingProvider;

    #[async_trait]
    impl PricingProvider for FailingProvider {
        async fn fetch_pricing(&self, domain: &str) -> Result<DomainPricing> {
            Err(DomainLensError::pricing(
                domain,
                "provider is down",
                Some("failing".to_string()),
            ))
        }

        fn name(&self) -> &'static str {
            "failing"
        }

        fn is_ready(&self) -> bool {
            false
        }
    }

    fn analyzer_with_seeded_pricing() -> DomainAnalyzer {
        let analyzer = DomainAnalyzer::new();
        analyzer.add_provider(Arc::new(SeededPricingProvider::with_seed(42)));
        analyzer.set_default_provider("synthetic");
        analyzer
    }

    #[tokio::test]
    async fn test_analyze_without_providers() {
        let analyzer = DomainAnalyzer::new();
        let result = analyzer.analyze("example.com").await.unwrap();

        assert_eq!(result.domain, "example.com");
        assert_eq!(result.metrics.overall_score, 7);
        assert!(result.pricing.is_none());
        assert!(result.has_strength("Uses .com extension"));
    }

    #[tokio::test]
    async fn test_analyze_invalid_domain() {
        let analyzer = DomainAnalyzer::new();
        assert!(matches!(
            analyzer.analyze("ab").await,
            Err(DomainLensError::InvalidDomain { .. })
        ));
    }

    #[tokio::test]
    async fn test_analyze_with_seeded_pricing() {
        let analyzer = analyzer_with_seeded_pricing();
        let first = analyzer.analyze("example.com").await.unwrap();
        let second = analyzer.analyze("example.com").await.unwrap();

        assert!(first.pricing.is_some());
        assert_eq!(first.pricing, second.pricing);
    }

    #[tokio::test]
    async fn test_enrichment_failure_is_swallowed() {
        let analyzer = DomainAnalyzer::new();
        analyzer.add_provider(Arc::new(FailingProvider));
        analyzer.set_default_provider("failing");

        let result = analyzer.analyze("example.com").await.unwrap();
        assert!(result.pricing.is_none());
        assert_eq!(analyzer.get_metrics_snapshot().enrichment_failures, 1);
    }

    #[tokio::test]
    async fn test_failing_default_falls_back() {
        let analyzer = analyzer_with_seeded_pricing();
        analyzer.add_provider(Arc::new(FailingProvider));
        analyzer.set_default_provider("failing");

        let result = analyzer.analyze("example.com").await.unwrap();
        assert!(result.pricing.is_some());
    }

    #[tokio::test]
    async fn test_pricing_disabled_by_config() {
        let config = AnalyzeConfig {
            pricing_enabled: false,
            ..Default::default()
        };
        let analyzer = DomainAnalyzer::with_config(config);
        analyzer.add_provider(Arc::new(SeededPricingProvider::new()));

        let result = analyzer.analyze("example.com").await.unwrap();
        assert!(result.pricing.is_none());
    }

    #[tokio::test]
    async fn test_analyze_all_preserves_order() {
        let analyzer = DomainAnalyzer::new();
        let domains = vec![
            "example.com".to_string(),
            "myseo-app.io".to_string(),
            "site123.net".to_string(),
        ];
        let results = analyzer.analyze_all(&domains).await.unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(names, vec!["example.com", "myseo-app.io", "site123.net"]);
    }

    #[tokio::test]
    async fn test_compare_picks_highest_score() {
        let analyzer = DomainAnalyzer::new();
        let domains = vec!["example.net".to_string(), "myseo-app.io".to_string()];
        let comparison = analyzer.compare(&domains).await.unwrap();

        // myseo-app.io scores 8, example.net lands lower
        assert_eq!(comparison.best_choice, "myseo-app.io");
    }

    #[tokio::test]
    async fn test_compare_tie_break_keeps_first() {
        let analyzer = DomainAnalyzer::new();
        // Both of these round to the same overall score
        let domains = vec!["example.com".to_string(), "example.org".to_string()];
        let comparison = analyzer.compare(&domains).await.unwrap();

        let scores: Vec<i32> = comparison
            .domains
            .iter()
            .map(|d| d.metrics.overall_score)
            .collect();
        assert_eq!(scores[0], scores[1], "fixture must tie: {:?}", scores);
        assert_eq!(comparison.best_choice, "example.com");

        // Reversing the input order flips the winner
        let reversed = vec!["example.org".to_string(), "example.com".to_string()];
        let comparison = analyzer.compare(&reversed).await.unwrap();
        assert_eq!(comparison.best_choice, "example.org");
    }

    #[tokio::test]
    async fn test_compare_long_domain_scenario() {
        let analyzer = DomainAnalyzer::new();
        let domains = vec![
            "short.com".to_string(),
            "averylongdomainnameexample.net".to_string(),
        ];
        let comparison = analyzer.compare(&domains).await.unwrap();
        assert_eq!(comparison.best_choice, "short.com");
    }

    #[tokio::test]
    async fn test_compare_empty_list() {
        let analyzer = DomainAnalyzer::new();
        assert!(analyzer.compare(&[]).await.is_err());
    }

    #[tokio::test]
    async fn test_compare_propagates_invalid_domain() {
        let analyzer = DomainAnalyzer::new();
        let domains = vec!["example.com".to_string(), "nodot".to_string()];
        assert!(analyzer.compare(&domains).await.is_err());
    }
}
