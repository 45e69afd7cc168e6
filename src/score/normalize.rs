//! Domain normalization
//!
//! Turns whatever the user typed (scheme, `www.`, path, mixed case) into a
//! canonical `(name, extension)` pair or rejects it.

use crate::error::{DomainLensError, Result};
use crate::types::NormalizedDomain;
use regex::Regex;

/// Normalize a raw user-entered domain string
///
/// Lowercases and trims, strips a leading `http://`/`https://` and `www.`,
/// discards everything after the first `/`, then splits on the last `.`.
/// Fails with `InvalidDomain` when no dot separator remains or either side
/// of the split is empty. No charset or punycode validation is performed;
/// malformed but dot-containing strings pass through.
pub fn normalize(raw: &str) -> Result<NormalizedDomain> {
    let cleaned = clean(raw)
        .map_err(|e| DomainLensError::internal(e.to_string()))?;

    let (name, extension) = split_domain(&cleaned).ok_or_else(|| {
        DomainLensError::invalid_domain(raw.trim(), "no dot separator found")
    })?;

    if name.is_empty() {
        return Err(DomainLensError::invalid_domain(raw.trim(), "domain name part is empty"));
    }
    if extension.is_empty() {
        return Err(DomainLensError::invalid_domain(raw.trim(), "domain extension is empty"));
    }

    Ok(NormalizedDomain {
        name: name.to_string(),
        extension: extension.to_string(),
    })
}

/// Strip scheme, `www.` prefix and path, lowercase the rest
fn clean(raw: &str) -> std::result::Result<String, regex::Error> {
    let lowered = raw.trim().to_lowercase();
    let prefix = Regex::new(r"^(https?://)?(www\.)?")?;
    let stripped = prefix.replace(&lowered, "");
    let host = stripped.split('/').next().unwrap_or("");
    Ok(host.to_string())
}

/// Split a cleaned domain on its last dot
///
/// Multi-label TLDs are not special-cased; the extension is only the final
/// label (`shop.co.uk` splits into `shop.co` and `uk`).
pub fn split_domain(domain: &str) -> Option<(&str, &str)> {
    let idx = domain.rfind('.')?;
    Some((&domain[..idx], &domain[idx + 1..]))
}
