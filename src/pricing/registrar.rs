//! RDAP-backed pricing provider
//!
//! Availability comes from the TLD's RDAP endpoint (404 means no
//! registration data, i.e. available); the price is the static per-TLD list
//! price. Taken domains carry the registrar parsed from the RDAP entity
//! vCard instead of a price.

use crate::error::{DomainLensError, Result};
use crate::pricing::registry::{list_price, rdap_base_url};
use crate::pricing::PricingProvider;
use crate::types::DomainPricing;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

const RDAP_TIMEOUT_SECS: u64 = 10;

/// Pricing provider backed by public RDAP servers
pub struct RegistrarPricingClient {
    client: Client,
}

impl RegistrarPricingClient {
    /// Create a client with a sensible request timeout
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("domain-lens/0.1.0")
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });
        Self { client }
    }

    async fn query_rdap(&self, domain: &str) -> Result<DomainPricing> {
        let tld = domain
            .split('.')
            .last()
            .ok_or_else(|| DomainLensError::invalid_domain(domain, "no TLD found"))?;

        let base = rdap_base_url(tld).ok_or_else(|| {
            DomainLensError::pricing(
                domain,
                format!("No RDAP server found for TLD: {}", tld),
                Some("registrar".to_string()),
            )
        })?;

        let url = format!("{}domain/{}", base, domain);

        let response = timeout(
            Duration::from_secs(RDAP_TIMEOUT_SECS),
            self.client.get(&url).send(),
        )
        .await
        .map_err(|_| DomainLensError::timeout("RDAP request", RDAP_TIMEOUT_SECS))?
        .map_err(|e| DomainLensError::network(e.to_string(), None, Some(url.clone())))?;

        let status = response.status();

        if status.as_u16() == 404 {
            return Ok(DomainPricing {
                available: true,
                price: list_price(tld),
                currency: list_price(tld).map(|_| "USD".to_string()),
                registrar: None,
            });
        }

        if !status.is_success() {
            return Err(DomainLensError::network(
                format!("RDAP request failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainLensError::network(e.to_string(), None, Some(url.clone())))?;

        let rdap_response: RdapResponse = serde_json::from_str(&text)
            .map_err(|e| DomainLensError::parse(e.to_string(), Some(text)))?;

        Ok(parse_rdap_response(&rdap_response, tld))
    }
}

impl Default for RegistrarPricingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingProvider for RegistrarPricingClient {
    async fn fetch_pricing(&self, domain: &str) -> Result<DomainPricing> {
        match self.query_rdap(domain).await {
            Ok(pricing) => Ok(pricing),
            // A "not found" style failure still means the domain is free
            Err(e) if e.suggests_available() => {
                let tld = domain.split('.').last().unwrap_or("");
                Ok(DomainPricing {
                    available: true,
                    price: list_price(tld),
                    currency: list_price(tld).map(|_| "USD".to_string()),
                    registrar: None,
                })
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &'static str {
        "registrar"
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Interpret an RDAP body: any registration data means the domain is taken
fn parse_rdap_response(response: &RdapResponse, tld: &str) -> DomainPricing {
    let taken = !response.status.is_empty()
        || !response.entities.is_empty()
        || !response.events.is_empty()
        || !response.nameservers.is_empty();

    if !taken {
        return DomainPricing {
            available: true,
            price: list_price(tld),
            currency: list_price(tld).map(|_| "USD".to_string()),
            registrar: None,
        };
    }

    let registrar = response
        .entities
        .iter()
        .find(|e| e.roles.contains(&"registrar".to_string()))
        .and_then(|e| e.vcard_array.as_ref())
        .and_then(|vcard| {
            vcard
                .get(1)
                .and_then(|props| props.as_array())
                .and_then(|props| props.first())
                .and_then(|prop| prop.as_array())
                .and_then(|prop| prop.get(3))
                .and_then(|name| name.as_str())
                .map(|s| s.to_string())
        });

    DomainPricing {
        available: false,
        price: None,
        currency: None,
        registrar,
    }
}

/// RDAP response structures
#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    status: Vec<String>,
    #[serde(default)]
    entities: Vec<RdapEntity>,
    #[serde(default)]
    events: Vec<RdapEvent>,
    #[serde(default)]
    nameservers: Vec<RdapNameserver>,
}

#[derive(Debug, Deserialize)]
struct RdapEntity {
    #[serde(default)]
    roles: Vec<String>,
    #[serde(rename = "vcardArray")]
    vcard_array: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RdapNameserver {
    #[serde(rename = "ldhName")]
    ldh_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RegistrarPricingClient::new();
        assert!(client.is_ready());
        assert_eq!(client.name(), "registrar");
    }

    #[test]
    fn test_parse_taken_domain_with_registrar() {
        let body = r#"{
            "status": ["active"],
            "entities": [{
                "roles": ["registrar"],
                "vcardArray": ["vcard", [["fn", {}, "text", "Example Registrar Inc."]]]
            }],
            "events": [],
            "nameservers": [{"ldhName": "ns1.example.com"}]
        }"#;
        let response: RdapResponse = serde_json::from_str(body).unwrap();
        let pricing = parse_rdap_response(&response, "com");

        assert!(!pricing.available);
        assert_eq!(pricing.price, None);
        assert_eq!(pricing.registrar.as_deref(), Some("Example Registrar Inc."));
    }

    #[test]
    fn test_parse_empty_body_is_available() {
        let response: RdapResponse = serde_json::from_str("{}").unwrap();
        let pricing = parse_rdap_response(&response, "com");

        assert!(pricing.available);
        assert_eq!(pricing.price, Some(12.99));
        assert_eq!(pricing.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_not_found_error_maps_to_available() {
        let err = DomainLensError::network("RDAP request failed with status 404", Some(404), None);
        assert!(err.suggests_available());
    }
}
