//! Integration tests for domain-lens

use domain_lens::{
    compute_metrics, normalize, AnalyzeConfig, DomainAnalyzer, DomainLensError,
    SeededPricingProvider,
};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_library_initialization() {
    assert!(domain_lens::init().is_ok());
}

#[test]
fn test_normalize_public_api() {
    let domain = normalize("https://www.Example.COM/about").unwrap();
    assert_eq!(domain.name, "example");
    assert_eq!(domain.extension, "com");

    // Already-normalized input is a fixed point
    let again = normalize(&domain.full_domain()).unwrap();
    assert_eq!(domain, again);
}

#[test]
fn test_normalize_rejects_dotless_input() {
    match normalize("ab") {
        Err(DomainLensError::InvalidDomain { input, .. }) => assert_eq!(input, "ab"),
        other => panic!("expected InvalidDomain, got {:?}", other),
    }
}

#[test]
fn test_metrics_are_pure_and_stable() {
    let domain = normalize("myseo-app.io").unwrap();
    let first = compute_metrics(&domain);
    let second = compute_metrics(&domain);
    assert_eq!(first, second);
    assert_eq!(first.keyword_placement, 8.0);
    assert_eq!(first.overall_score, 8);
}

#[tokio::test]
async fn test_full_pipeline_example_com() {
    let analyzer = DomainAnalyzer::new();
    let result = analyzer.analyze("example.com").await.unwrap();

    assert_eq!(result.domain, "example.com");
    assert_eq!(result.metrics.length, 10.0);
    assert_eq!(result.metrics.domain_extension, 10.0);
    assert!(!result.metrics.has_keywords);
    assert!(result.has_strength("Uses .com extension"));
    assert!(result.has_weakness("No relevant keywords"));
    assert!(result.pricing.is_none());
}

#[tokio::test]
async fn test_full_pipeline_with_url_input() {
    let analyzer = DomainAnalyzer::new();
    let result = analyzer
        .analyze("https://www.myseo-app.io/page")
        .await
        .unwrap();

    assert_eq!(result.domain, "myseo-app.io");
    assert!(result.has_weakness("Contains hyphens"));
    assert_eq!(result.metrics.keyword_placement, 8.0);
}

#[tokio::test]
async fn test_comparison_scenario() {
    let analyzer = DomainAnalyzer::new();
    let domains = vec![
        "short.com".to_string(),
        "averylongdomainnameexample.net".to_string(),
    ];
    let comparison = analyzer.compare(&domains).await.unwrap();

    assert_eq!(comparison.best_choice, "short.com");
    assert_eq!(comparison.domains.len(), 2);
    // Input order preserved in results
    assert_eq!(comparison.domains[0].domain, "short.com");

    let max = comparison
        .domains
        .iter()
        .map(|d| d.metrics.overall_score)
        .max()
        .unwrap();
    let best = comparison
        .domains
        .iter()
        .find(|d| d.domain == comparison.best_choice)
        .unwrap();
    assert_eq!(best.metrics.overall_score, max);
}

#[tokio::test]
async fn test_seeded_pricing_is_reproducible() {
    let make_analyzer = || {
        let analyzer = DomainAnalyzer::new();
        analyzer.add_provider(Arc::new(SeededPricingProvider::with_seed(99)));
        analyzer.set_default_provider("synthetic");
        analyzer
    };

    let first = make_analyzer().analyze("site123.net").await.unwrap();
    let second = make_analyzer().analyze("site123.net").await.unwrap();

    assert!(first.pricing.is_some());
    assert_eq!(first.pricing, second.pricing);
    assert!(first.has_weakness("Contains numbers"));
}

#[tokio::test]
async fn test_analyzer_with_custom_config() {
    let config = AnalyzeConfig {
        concurrent_analyses: 2,
        pricing_enabled: false,
        pricing_timeout: Duration::from_secs(1),
    };
    let analyzer = DomainAnalyzer::with_config(config);
    analyzer.add_provider(Arc::new(SeededPricingProvider::new()));

    let result = analyzer.analyze("example.com").await.unwrap();
    // Pricing disabled overrides registered providers
    assert!(result.pricing.is_none());

    let metrics = analyzer.get_metrics_snapshot();
    assert_eq!(metrics.domains_analyzed, 1);
    assert_eq!(metrics.enrichment_failures, 0);
}

#[test]
fn test_error_display() {
    let error = DomainLensError::invalid_domain("ab", "no dot separator found");
    assert!(error.to_string().contains("ab"));

    let error = DomainLensError::config("config error");
    assert!(error.to_string().contains("config error"));

    let error = DomainLensError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_analysis_result_serializes() {
    let domain = normalize("example.com").unwrap();
    let metrics = compute_metrics(&domain);
    let json = serde_json::to_string(&metrics).unwrap();
    assert!(json.contains("\"overall_score\":7"));
}
