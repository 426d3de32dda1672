//! Filter engine: conjunction of the active predicates over a collection
//!
//! A dimension participates only when its criterion is non-neutral; inactive
//! dimensions are skipped outright rather than evaluated as vacuously true
//! (keeping "inactive" distinct from the permissive-on-missing rule). Cheap
//! local predicates run before predicates that scan the sibling collection.

use crate::error::validate_criteria;
use crate::predicates;
use contracts::domain::a001_institution::Institution;
use contracts::domain::a002_program::Program;
use contracts::domain::common::AggregateRoot;
use contracts::shared::discovery::Criteria;

/// Institutions matching every active criterion.
///
/// `programs` is the join collection for the derived dimensions (degree
/// level, field of study, scholarship). Empty inputs are fine: a degree-level
/// filter against zero programs yields zero institutions.
pub fn filter_institutions(
    institutions: &[Institution],
    programs: &[Program],
    criteria: &Criteria,
) -> Vec<Institution> {
    let active = normalize(criteria);

    let result: Vec<Institution> = institutions
        .iter()
        .filter(|inst| institution_passes(inst, programs, &active))
        .cloned()
        .collect();

    log::debug!(
        "filter_institutions: {} of {} matched",
        result.len(),
        institutions.len()
    );
    result
}

/// Programs matching every active criterion.
///
/// Country and subject use the program's own (denormalized) fields; ranking
/// criteria join to the owning institution. A program whose institution is
/// absent from the snapshot passes a ranking criterion (permissive-on-missing).
pub fn filter_programs(
    programs: &[Program],
    institutions: &[Institution],
    criteria: &Criteria,
) -> Vec<Program> {
    let active = normalize(criteria);

    let result: Vec<Program> = programs
        .iter()
        .filter(|program| program_passes(program, institutions, &active))
        .cloned()
        .collect();

    log::debug!(
        "filter_programs: {} of {} matched",
        result.len(),
        programs.len()
    );
    result
}

fn normalize(criteria: &Criteria) -> Criteria {
    let active = criteria.normalized();
    if active != *criteria {
        log::debug!("criteria normalized before filtering");
    }
    // Unreachable after normalization; malformed criteria are a caller bug
    debug_assert!(validate_criteria(&active).is_ok());
    active
}

fn institution_passes(inst: &Institution, programs: &[Program], active: &Criteria) -> bool {
    // cheap local predicates
    if !active.query.is_empty() && !predicates::text_matches(&active.query, &[inst.name()]) {
        return false;
    }
    if !predicates::country_in(&inst.country, &active.countries) {
        return false;
    }
    if let Some(range) = &active.tuition {
        if !range.contains(inst.tuition_min) {
            return false;
        }
    }
    if let Some(filter) = &active.ranking_tier {
        let rank = predicates::ranking_value(inst, filter.kind);
        if !predicates::rank_within(rank, filter.tier.max_rank()) {
            return false;
        }
    }
    if let Some(filter) = &active.ranking_range {
        let rank = predicates::ranking_value(inst, filter.kind).map(f64::from);
        if !filter.range.contains(rank) {
            return false;
        }
    }
    if let Some(range) = &active.population {
        if !range.contains(inst.student_population.map(|p| p as f64)) {
            return false;
        }
    }

    // join-scanning predicates last
    if let Some(level) = active.level {
        if !predicates::institution_offers_level(inst.id(), programs, level) {
            return false;
        }
    }
    if let Some(field) = &active.field_of_study {
        if !predicates::institution_offers_subject(inst.id(), programs, field) {
            return false;
        }
    }
    if active.scholarship_only && !predicates::institution_offers_scholarship(inst.id(), programs)
    {
        return false;
    }
    true
}

fn program_passes(program: &Program, institutions: &[Institution], active: &Criteria) -> bool {
    // cheap local predicates
    if !active.query.is_empty()
        && !predicates::text_matches(&active.query, &[program.title(), &program.subject_area])
    {
        return false;
    }
    if !predicates::country_in(&program.country, &active.countries) {
        return false;
    }
    if let Some(level) = active.level {
        if program.level != level {
            return false;
        }
    }
    if let Some(field) = &active.field_of_study {
        if !predicates::subject_matches(&program.subject_area, field) {
            return false;
        }
    }
    if let Some(range) = &active.tuition {
        if !range.contains(program.tuition_min) {
            return false;
        }
    }
    if active.scholarship_only && !program.scholarship_available {
        return false;
    }

    // join-scanning predicates last
    if active.ranking_tier.is_some() || active.ranking_range.is_some() {
        let owner = predicates::owning_institution(program, institutions);
        if let Some(filter) = &active.ranking_tier {
            let rank = owner.and_then(|inst| predicates::ranking_value(inst, filter.kind));
            if !predicates::rank_within(rank, filter.tier.max_rank()) {
                return false;
            }
        }
        if let Some(filter) = &active.ranking_range {
            let rank = owner
                .and_then(|inst| predicates::ranking_value(inst, filter.kind))
                .map(f64::from);
            if !filter.range.contains(rank) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_institution::InstitutionId;
    use contracts::enums::{DegreeLevel, RankingKind, RankingTier};

    fn institution(name: &str, country: &str, ranking: Option<u32>) -> Institution {
        let mut inst = Institution::new_for_insert(
            "INST".into(),
            name.into(),
            "City".into(),
            country.into(),
        );
        inst.ranking = ranking;
        inst
    }

    fn program(
        institution_id: InstitutionId,
        subject: &str,
        level: DegreeLevel,
        country: &str,
    ) -> Program {
        Program::new_for_insert(
            "PRG".into(),
            format!("{} ({})", subject, level.display_name()),
            institution_id,
            subject.into(),
            level,
            country.into(),
        )
    }

    #[test]
    fn test_country_filter_with_ranking_sort_scenario() {
        // two UK institutions, one US; the UK filter keeps the survivors
        // in input order
        let a = institution("A", "UK", Some(50));
        let b = institution("B", "UK", None);
        let c = institution("C", "US", Some(10));
        let institutions = vec![a.clone(), b.clone(), c];

        let criteria = Criteria::new().with_country("UK");
        let filtered = filter_institutions(&institutions, &[], &criteria);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name(), "A");
        assert_eq!(filtered[1].name(), "B");
    }

    #[test]
    fn test_all_country_sentinel_has_no_effect() {
        let institutions = vec![
            institution("A", "UK", Some(1)),
            institution("B", "US", Some(2)),
        ];
        let with_sentinel = Criteria::new().with_country("all").with_query("a");
        let without = Criteria::new().with_query("a");
        assert_eq!(
            filter_institutions(&institutions, &[], &with_sentinel),
            filter_institutions(&institutions, &[], &without)
        );
    }

    #[test]
    fn test_missing_tuition_passes_tuition_filter() {
        let institutions = vec![institution("A", "UK", None)];
        let criteria = Criteria::new().with_tuition(10_000.0, 20_000.0);
        assert_eq!(filter_institutions(&institutions, &[], &criteria).len(), 1);
    }

    #[test]
    fn test_inverted_range_is_repaired_not_inverted() {
        let mut inst = institution("A", "UK", None);
        inst.tuition_min = Some(15_000.0);
        let criteria = Criteria::new().with_tuition(20_000.0, 10_000.0);
        assert_eq!(filter_institutions(&[inst], &[], &criteria).len(), 1);
    }

    #[test]
    fn test_level_filter_against_zero_programs_yields_zero() {
        let institutions = vec![institution("A", "UK", None)];
        let criteria = Criteria::new().with_level(DegreeLevel::Masters);
        assert!(filter_institutions(&institutions, &[], &criteria).is_empty());
    }

    #[test]
    fn test_level_filter_joins_open_programs() {
        let a = institution("A", "UK", None);
        let b = institution("B", "UK", None);
        let programs = vec![program(a.id(), "Law", DegreeLevel::Masters, "UK")];
        let institutions = vec![a, b];

        let criteria = Criteria::new().with_level(DegreeLevel::Masters);
        let filtered = filter_institutions(&institutions, &programs, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name(), "A");
    }

    #[test]
    fn test_ranking_tier_is_permissive_on_missing() {
        let institutions = vec![
            institution("Ranked", "UK", Some(300)),
            institution("Unranked", "UK", None),
        ];
        let criteria = Criteria::new().with_ranking_tier(RankingKind::Overall, RankingTier::Top100);
        let filtered = filter_institutions(&institutions, &[], &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name(), "Unranked");
    }

    #[test]
    fn test_program_filters_use_denormalized_country() {
        let a = institution("A", "UK", None);
        let programs = vec![
            program(a.id(), "Law", DegreeLevel::Bachelors, "UK"),
            program(a.id(), "Law", DegreeLevel::Bachelors, "US"),
        ];
        let criteria = Criteria::new().with_country("UK");
        // no institutions passed: country never needs the join
        let filtered = filter_programs(&programs, &[], &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].country, "UK");
    }

    #[test]
    fn test_program_ranking_criterion_joins_owner() {
        let ranked = institution("Ranked", "UK", Some(40));
        let unranked = institution("Unranked", "UK", Some(400));
        let orphan_owner = InstitutionId::new_v4();
        let programs = vec![
            program(ranked.id(), "Law", DegreeLevel::Bachelors, "UK"),
            program(unranked.id(), "Law", DegreeLevel::Bachelors, "UK"),
            program(orphan_owner, "Law", DegreeLevel::Bachelors, "UK"),
        ];
        let institutions = vec![ranked.clone(), unranked];

        let criteria = Criteria::new().with_ranking_tier(RankingKind::Overall, RankingTier::Top50);
        let filtered = filter_programs(&programs, &institutions, &criteria);
        // the Top-50 owner passes; the 400-ranked owner fails; the orphan
        // has no known ranking and passes
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].institution_id, ranked.id());
        assert_eq!(filtered[1].institution_id, orphan_owner);
    }

    #[test]
    fn test_scholarship_only_filters_programs() {
        let a = institution("A", "UK", None);
        let mut with_scholarship = program(a.id(), "Law", DegreeLevel::Bachelors, "UK");
        with_scholarship.scholarship_available = true;
        let without = program(a.id(), "Arts", DegreeLevel::Bachelors, "UK");
        let programs = vec![with_scholarship, without];

        let criteria = Criteria::new().with_scholarship_only(true);
        let filtered = filter_programs(&programs, &[], &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].subject_area, "Law");
    }

    #[test]
    fn test_empty_inputs_do_not_error() {
        let criteria = Criteria::new().with_query("law");
        assert!(filter_institutions(&[], &[], &criteria).is_empty());
        assert!(filter_programs(&[], &[], &criteria).is_empty());
    }
}
