//! Static RDAP endpoints and list prices per TLD.
//!
//! We intentionally keep these small, static mappings (convention over
//! configuration).

/// Get the RDAP base URL for a TLD (lowercase, without leading dot).
///
/// Returned URL is expected to end with `/` and include any version path if needed.
pub fn rdap_base_url(tld: &str) -> Option<&'static str> {
    match tld {
        "com" => Some("https://rdap.verisign.com/com/v1/"),
        "net" => Some("https://rdap.verisign.com/net/v1/"),
        "org" => Some("https://rdap.org.org/"),
        "io" => Some("https://rdap.nic.io/"),
        "ai" => Some("https://rdap.nic.ai/"),
        "tech" => Some("https://rdap.nic.tech/"),
        "app" => Some("https://rdap.nic.google/"),
        "dev" => Some("https://rdap.nic.google/"),
        "shop" => Some("https://rdap.nic.shop/"),
        "co" => Some("https://rdap.nic.co/"),
        "me" => Some("https://rdap.nic.me/"),
        _ => None,
    }
}

/// Build the RDAP domain query URL for a fully-qualified domain (e.g. `example.com`).
pub fn rdap_domain_url(domain: &str) -> Option<String> {
    let tld = domain.split('.').last()?;
    let base = rdap_base_url(tld)?;
    Some(format!("{base}domain/{domain}"))
}

/// Typical first-year registration list price in USD for a TLD
///
/// Used when a registrar API gives availability but no price.
pub fn list_price(tld: &str) -> Option<f64> {
    match tld {
        "com" => Some(12.99),
        "net" => Some(14.99),
        "org" => Some(13.99),
        "io" => Some(39.99),
        "ai" => Some(79.99),
        "co" => Some(29.99),
        "app" => Some(17.99),
        "dev" => Some(15.99),
        "tech" => Some(49.99),
        "shop" => Some(34.99),
        "me" => Some(19.99),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_known() {
        assert!(rdap_base_url("com").is_some());
        assert!(rdap_base_url("io").is_some());
        assert!(rdap_base_url("unknown").is_none());
    }

    #[test]
    fn test_domain_url() {
        let url = rdap_domain_url("example.com").unwrap();
        assert!(url.contains("domain/example.com"));
    }

    #[test]
    fn test_list_price_known_tlds() {
        assert_eq!(list_price("com"), Some(12.99));
        assert!(list_price("ai").unwrap() > list_price("com").unwrap());
        assert!(list_price("unknown").is_none());
    }
}
