//! Suggestion index: incremental type-ahead matcher over institutions
//!
//! Pure and idempotent, cheap enough to call on every keystroke at catalog
//! scale (low thousands of records); debouncing is the caller's concern.

use crate::predicates;
use contracts::domain::a001_institution::Institution;

/// Queries shorter than this never produce a dropdown
pub const MIN_QUERY_LEN: usize = 2;

/// Default result cap for the type-ahead dropdown
pub const SUGGEST_LIMIT: usize = 8;

/// Institutions whose name, city, or country contains the query,
/// case-insensitively. Results keep the input collection order and are
/// truncated to `limit`; there is no scoring.
pub fn suggest_institutions(
    institutions: &[Institution],
    query: &str,
    limit: usize,
) -> Vec<Institution> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    institutions
        .iter()
        .filter(|inst| {
            predicates::text_matches(trimmed, &[inst.name(), &inst.city, &inst.country])
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution(name: &str, city: &str, country: &str) -> Institution {
        Institution::new_for_insert("INST".into(), name.into(), city.into(), country.into())
    }

    fn sample() -> Vec<Institution> {
        vec![
            institution("University of Oxford", "Oxford", "UK"),
            institution("Oxford Brookes University", "Oxford", "UK"),
            institution("Harvard University", "Cambridge", "US"),
            institution("University of Melbourne", "Melbourne", "Australia"),
        ]
    }

    #[test]
    fn test_short_queries_are_noops() {
        let institutions = sample();
        assert!(suggest_institutions(&institutions, "", SUGGEST_LIMIT).is_empty());
        assert!(suggest_institutions(&institutions, "a", SUGGEST_LIMIT).is_empty());
    }

    #[test]
    fn test_matches_name_city_or_country() {
        let institutions = sample();
        // "ox" hits both Oxford records by name and city
        let by_name = suggest_institutions(&institutions, "ox", SUGGEST_LIMIT);
        assert_eq!(by_name.len(), 2);
        // "cambridge" hits Harvard through its city
        let by_city = suggest_institutions(&institutions, "cambridge", SUGGEST_LIMIT);
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].name(), "Harvard University");
        // "AUSTRAL" hits Melbourne through its country, case-insensitively
        let by_country = suggest_institutions(&institutions, "AUSTRAL", SUGGEST_LIMIT);
        assert_eq!(by_country.len(), 1);
    }

    #[test]
    fn test_results_are_truncated_in_input_order() {
        let institutions: Vec<Institution> = (0..20)
            .map(|i| institution(&format!("Oxbridge {}", i), "Town", "UK"))
            .collect();
        let suggestions = suggest_institutions(&institutions, "oxbridge", SUGGEST_LIMIT);
        assert_eq!(suggestions.len(), SUGGEST_LIMIT);
        assert_eq!(suggestions[0].name(), "Oxbridge 0");
        assert_eq!(suggestions[7].name(), "Oxbridge 7");
    }

    #[test]
    fn test_requery_is_idempotent() {
        let institutions = sample();
        let first = suggest_institutions(&institutions, "ox", SUGGEST_LIMIT);
        let second = suggest_institutions(&institutions, "ox", SUGGEST_LIMIT);
        assert_eq!(first, second);
    }
}
