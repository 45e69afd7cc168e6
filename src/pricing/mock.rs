//! Synthetic pricing provider
//!
//! Stands in for the real registrar lookup in tests and offline runs. All
//! output is derived from an explicit seed mixed with the domain string, so
//! the same (seed, domain) pair always yields the same pricing.

use crate::error::Result;
use crate::pricing::registry::list_price;
use crate::pricing::PricingProvider;
use crate::types::DomainPricing;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const DEFAULT_SEED: u64 = 0x5eed;

/// Fallback price band for TLDs without a list price
const UNKNOWN_TLD_PRICE_RANGE: (f64, f64) = (8.0, 60.0);

/// Deterministic pricing provider driven by a seeded generator
pub struct SeededPricingProvider {
    seed: u64,
}

impl SeededPricingProvider {
    /// Create a provider with the default seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a provider with an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, domain: &str) -> StdRng {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        domain.hash(&mut hasher);
        StdRng::seed_from_u64(hasher.finish())
    }
}

impl Default for SeededPricingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingProvider for SeededPricingProvider {
    async fn fetch_pricing(&self, domain: &str) -> Result<DomainPricing> {
        let mut rng = self.rng_for(domain);
        let available = rng.gen_bool(0.35);

        if !available {
            let registrars = ["NameBridge", "DotHarbor", "RegistryOne", "ClickDomains"];
            let registrar = registrars[rng.gen_range(0..registrars.len())];
            return Ok(DomainPricing {
                available: false,
                price: None,
                currency: None,
                registrar: Some(registrar.to_string()),
            });
        }

        let tld = domain.split('.').last().unwrap_or("");
        let base = list_price(tld)
            .unwrap_or_else(|| rng.gen_range(UNKNOWN_TLD_PRICE_RANGE.0..UNKNOWN_TLD_PRICE_RANGE.1));
        // Jitter of up to ±20% around the list price
        let jitter = rng.gen_range(0.8..1.2);
        let price = (base * jitter * 100.0).round() / 100.0;

        Ok(DomainPricing {
            available: true,
            price: Some(price),
            currency: Some("USD".to_string()),
            registrar: None,
        })
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn is_ready(&self) -> bool {
        true
    }
}
