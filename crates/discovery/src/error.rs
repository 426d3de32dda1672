use contracts::shared::discovery::Criteria;
use thiserror::Error;

/// The engine's narrow error taxonomy
///
/// Missing optional fields, empty collections, and unknown labels are all
/// handled by policy (permissive-on-missing, "N/A" cells, empty results),
/// never raised as errors.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A criteria range survived normalization with inverted bounds.
    /// Unreachable when `Criteria::normalized` runs first; kept because the
    /// pipeline contract allows surfacing it.
    #[error("invalid range: lo {lo} is greater than hi {hi}")]
    InvalidRange { lo: f64, hi: f64 },

    /// A criteria query string failed to decode
    #[error("invalid criteria query string: {0}")]
    InvalidQuery(#[from] serde_qs::Error),
}

/// Check every range criterion for ordered bounds
pub fn validate_criteria(criteria: &Criteria) -> Result<(), DiscoveryError> {
    let ranges = [
        criteria.tuition,
        criteria.population,
        criteria.ranking_range.map(|f| f.range),
    ];
    for range in ranges.into_iter().flatten() {
        if !range.is_valid() {
            return Err(DiscoveryError::InvalidRange {
                lo: range.lo,
                hi: range.hi,
            });
        }
    }
    Ok(())
}
