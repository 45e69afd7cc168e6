//! Pricing/availability enrichment
//!
//! Optional per-domain enrichment fetched by a pluggable async provider.
//! Failures here are never fatal for an analysis; the analyzer logs and
//! returns the result without pricing.

pub mod mock;
pub mod registrar;
pub mod registry;

// Re-export main functionality
pub use mock::SeededPricingProvider;
pub use registrar::RegistrarPricingClient;

use crate::error::Result;
use crate::types::DomainPricing;
use async_trait::async_trait;

/// Core trait for all pricing providers
#[async_trait]
pub trait PricingProvider: Send + Sync {
    /// Fetch pricing/availability data for a fully-qualified domain
    async fn fetch_pricing(&self, domain: &str) -> Result<DomainPricing>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available pricing providers
pub fn available_providers() -> Vec<&'static str> {
    vec!["registrar", "synthetic"]
}

/// Create a pricing provider by name
pub fn create_provider(name: &str) -> Result<Box<dyn PricingProvider>> {
    match name {
        "registrar" => Ok(Box::new(RegistrarPricingClient::new())),
        "synthetic" => Ok(Box::new(SeededPricingProvider::new())),
        _ => Err(crate::error::DomainLensError::config(format!(
            "Unsupported pricing provider: {}. Supported providers: {}",
            name,
            available_providers().join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_providers() {
        for name in available_providers() {
            assert!(create_provider(name).is_ok(), "provider: {}", name);
        }
    }

    #[test]
    fn test_create_unknown_provider() {
        assert!(create_provider("whois").is_err());
    }
}
