//! Rank/sort engine: deterministic ordering with explicit missing-value
//! sentinels
//!
//! Every sort is stable, so records with equal keys keep their input order —
//! the input order is itself meaningful (relevance is the identity order).
//! Missing values are normalized to concrete sentinels before comparison:
//! an absent ranking sorts last; an unknown fee sorts to the low end in both
//! tuition directions, never to the high end.

use contracts::domain::a001_institution::Institution;
use contracts::domain::a002_program::Program;
use contracts::enums::SortKey;

/// Order institutions by the selected key
pub fn sort_institutions(mut records: Vec<Institution>, key: SortKey) -> Vec<Institution> {
    match key {
        SortKey::Relevance => {}
        SortKey::RankingAsc => {
            // missing ranking sorts as if +infinity
            records.sort_by_key(|inst| inst.ranking.unwrap_or(u32::MAX));
        }
        SortKey::NameAsc => {
            records.sort_by_cached_key(|inst| inst.name().to_lowercase());
        }
        SortKey::TuitionAsc => {
            records.sort_by(|a, b| {
                a.tuition_min
                    .unwrap_or(0.0)
                    .total_cmp(&b.tuition_min.unwrap_or(0.0))
            });
        }
        SortKey::TuitionDesc => {
            records.sort_by(|a, b| {
                b.tuition_max
                    .unwrap_or(0.0)
                    .total_cmp(&a.tuition_max.unwrap_or(0.0))
            });
        }
    }
    records
}

/// Order programs by the selected key
///
/// Programs carry no ranking column, so `RankingAsc` degrades to the
/// identity order.
pub fn sort_programs(mut records: Vec<Program>, key: SortKey) -> Vec<Program> {
    match key {
        SortKey::Relevance | SortKey::RankingAsc => {}
        SortKey::NameAsc => {
            records.sort_by_cached_key(|program| program.title().to_lowercase());
        }
        SortKey::TuitionAsc => {
            records.sort_by(|a, b| {
                a.tuition_min
                    .unwrap_or(0.0)
                    .total_cmp(&b.tuition_min.unwrap_or(0.0))
            });
        }
        SortKey::TuitionDesc => {
            records.sort_by(|a, b| {
                b.tuition_max
                    .unwrap_or(0.0)
                    .total_cmp(&a.tuition_max.unwrap_or(0.0))
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution(name: &str, ranking: Option<u32>) -> Institution {
        let mut inst =
            Institution::new_for_insert("INST".into(), name.into(), "City".into(), "UK".into());
        inst.ranking = ranking;
        inst
    }

    fn with_tuition(name: &str, min: Option<f64>, max: Option<f64>) -> Institution {
        let mut inst = institution(name, None);
        inst.tuition_min = min;
        inst.tuition_max = max;
        inst
    }

    fn names(records: &[Institution]) -> Vec<&str> {
        records.iter().map(|inst| inst.name()).collect()
    }

    #[test]
    fn test_missing_ranking_sorts_last() {
        let records = vec![
            institution("Unranked", None),
            institution("Fifty", Some(50)),
            institution("Ten", Some(10)),
        ];
        let sorted = sort_institutions(records, SortKey::RankingAsc);
        assert_eq!(names(&sorted), vec!["Ten", "Fifty", "Unranked"]);
    }

    #[test]
    fn test_ranking_sort_is_stable_and_idempotent() {
        let records = vec![
            institution("First", Some(50)),
            institution("Second", Some(50)),
            institution("NoRankA", None),
            institution("NoRankB", None),
        ];
        let sorted = sort_institutions(records, SortKey::RankingAsc);
        assert_eq!(names(&sorted), vec!["First", "Second", "NoRankA", "NoRankB"]);
        let again = sort_institutions(sorted.clone(), SortKey::RankingAsc);
        assert_eq!(sorted, again);
    }

    #[test]
    fn test_relevance_is_identity() {
        let records = vec![institution("B", Some(2)), institution("A", Some(1))];
        let sorted = sort_institutions(records.clone(), SortKey::Relevance);
        assert_eq!(sorted, records);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let records = vec![
            institution("beta college", None),
            institution("Alpha University", None),
        ];
        let sorted = sort_institutions(records, SortKey::NameAsc);
        assert_eq!(names(&sorted), vec!["Alpha University", "beta college"]);
    }

    #[test]
    fn test_unknown_fee_sorts_low_in_both_directions() {
        let records = vec![
            with_tuition("Pricey", Some(30_000.0), Some(40_000.0)),
            with_tuition("Unknown", None, None),
            with_tuition("Cheap", Some(5_000.0), Some(8_000.0)),
        ];
        let ascending = sort_institutions(records.clone(), SortKey::TuitionAsc);
        assert_eq!(names(&ascending), vec!["Unknown", "Cheap", "Pricey"]);

        let descending = sort_institutions(records, SortKey::TuitionDesc);
        assert_eq!(names(&descending), vec!["Pricey", "Cheap", "Unknown"]);
    }

    #[test]
    fn test_program_ranking_key_keeps_input_order() {
        use contracts::domain::a001_institution::InstitutionId;
        use contracts::enums::DegreeLevel;
        let owner = InstitutionId::new_v4();
        let make = |title: &str| {
            Program::new_for_insert(
                "PRG".into(),
                title.into(),
                owner,
                "Law".into(),
                DegreeLevel::Bachelors,
                "UK".into(),
            )
        };
        let records = vec![make("Zeta"), make("Alpha")];
        let sorted = sort_programs(records.clone(), SortKey::RankingAsc);
        assert_eq!(sorted, records);
    }
}
