//! Domain Lens - SEO domain scoring and comparison
//!
//! Scores domain names for SEO friendliness with a deterministic heuristic
//! pipeline, derives actionable insights, optionally enriches results with
//! pricing/availability data, and compares candidates to pick the best one.

pub mod analyzer;
pub mod error;
pub mod pricing;
pub mod score;
pub mod types;

// Re-export commonly used types
pub use error::{DomainLensError, Result};
pub use types::{
    AnalysisResult, AnalyzeConfig, AnalyzerMetrics, DomainComparison, DomainPricing, Insight,
    InsightCategory, MetricsSnapshot, NormalizedDomain, SeoMetrics,
};

// Re-export main functionality
pub use analyzer::DomainAnalyzer;
pub use pricing::{PricingProvider, RegistrarPricingClient, SeededPricingProvider};
pub use score::{compute_metrics, generate_insights, normalize};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
