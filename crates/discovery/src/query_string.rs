//! Criteria ⇄ query-string codec
//!
//! Discovery pages seed their Criteria from URL parameters and write the
//! active selections back, so a session can be replayed from a link.
//! Decoding normalizes the result: replaying filter + sort over the same
//! snapshot reproduces the original ordered list exactly.

use crate::error::DiscoveryError;
use contracts::shared::discovery::Criteria;

/// Decode criteria from a URL query string (a leading '?' is tolerated)
pub fn criteria_from_query_string(query: &str) -> Result<Criteria, DiscoveryError> {
    let raw: Criteria = serde_qs::from_str(query.trim_start_matches('?'))?;
    Ok(raw.normalized())
}

/// Encode criteria as a URL query string; neutral dimensions are omitted
pub fn criteria_to_query_string(criteria: &Criteria) -> Result<String, DiscoveryError> {
    Ok(serde_qs::to_string(&criteria.normalized())?)
}
