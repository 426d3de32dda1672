//! Predicate library: pure per-record checks, one per filter dimension
//!
//! Two policies hold throughout. Range predicates are permissive-on-missing:
//! a record without a value is never excluded by a range criterion, so "no
//! data" never reads as "doesn't qualify". Categorical predicates treat the
//! `"all"` sentinel (and blank values) as always-true.

use contracts::domain::a001_institution::{Institution, InstitutionId};
use contracts::domain::a002_program::Program;
use contracts::domain::common::AggregateRoot;
use contracts::enums::{DegreeLevel, RankingKind};
use contracts::shared::discovery::is_all_sentinel;

/// Case-insensitive substring match over a fixed set of record fields.
/// An empty query matches everything.
pub fn text_matches(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact country match, case-insensitive; the `"all"` sentinel passes
pub fn country_matches(record_country: &str, criterion: &str) -> bool {
    if is_all_sentinel(criterion) {
        return true;
    }
    record_country.trim().eq_ignore_ascii_case(criterion.trim())
}

/// Membership in a selected country set; an empty set means no restriction
pub fn country_in(record_country: &str, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected
        .iter()
        .any(|country| country_matches(record_country, country))
}

/// Exact subject match, case-insensitive; the `"all"` sentinel passes
pub fn subject_matches(record_subject: &str, criterion: &str) -> bool {
    if is_all_sentinel(criterion) {
        return true;
    }
    record_subject.trim().eq_ignore_ascii_case(criterion.trim())
}

/// The ranking column selected by `kind`
pub fn ranking_value(institution: &Institution, kind: RankingKind) -> Option<u32> {
    match kind {
        RankingKind::Overall => institution.ranking,
        RankingKind::Qs => institution.qs_ranking,
        RankingKind::Times => institution.times_ranking,
    }
}

/// Tier membership; a record without a ranking passes (permissive-on-missing)
pub fn rank_within(rank: Option<u32>, max_rank: u32) -> bool {
    match rank {
        Some(r) => r <= max_rank,
        None => true,
    }
}

/// Joined predicate: the institution has ANY open program at this level.
/// Scans the sibling collection; an empty collection yields false.
pub fn institution_offers_level(
    institution_id: InstitutionId,
    programs: &[Program],
    level: DegreeLevel,
) -> bool {
    programs.iter().any(|program| {
        program.institution_id == institution_id
            && program.status.is_open()
            && program.level == level
    })
}

/// Joined predicate: the institution has ANY open program in this subject.
/// The `"all"` sentinel short-circuits true without scanning.
pub fn institution_offers_subject(
    institution_id: InstitutionId,
    programs: &[Program],
    subject: &str,
) -> bool {
    if is_all_sentinel(subject) {
        return true;
    }
    programs.iter().any(|program| {
        program.institution_id == institution_id
            && program.status.is_open()
            && program.subject_area.trim().eq_ignore_ascii_case(subject.trim())
    })
}

/// Joined predicate: the institution has ANY open program with a scholarship
pub fn institution_offers_scholarship(
    institution_id: InstitutionId,
    programs: &[Program],
) -> bool {
    programs.iter().any(|program| {
        program.institution_id == institution_id
            && program.status.is_open()
            && program.scholarship_available
    })
}

/// Convenience: owning institution of a program, if present in the snapshot
pub fn owning_institution<'a>(
    program: &Program,
    institutions: &'a [Institution],
) -> Option<&'a Institution> {
    institutions
        .iter()
        .find(|institution| institution.id() == program.institution_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ProgramStatus;

    fn institution(name: &str, country: &str) -> Institution {
        Institution::new_for_insert("INST".into(), name.into(), "City".into(), country.into())
    }

    fn program(institution_id: InstitutionId, level: DegreeLevel) -> Program {
        Program::new_for_insert(
            "PRG".into(),
            "Program".into(),
            institution_id,
            "Law".into(),
            level,
            "UK".into(),
        )
    }

    #[test]
    fn test_text_matches_is_case_insensitive() {
        assert!(text_matches("OXF", &["University of Oxford"]));
        assert!(!text_matches("cambridge", &["University of Oxford"]));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(text_matches("", &["anything"]));
        assert!(text_matches("   ", &["anything"]));
    }

    #[test]
    fn test_country_all_sentinel_always_passes() {
        assert!(country_matches("Australia", "all"));
        assert!(country_matches("Australia", "All"));
        assert!(country_matches("Australia", "australia"));
        assert!(!country_matches("Australia", "Canada"));
    }

    #[test]
    fn test_empty_country_set_passes() {
        assert!(country_in("UK", &[]));
        assert!(country_in("UK", &["US".into(), "uk".into()]));
        assert!(!country_in("UK", &["US".into()]));
    }

    #[test]
    fn test_rank_within_is_permissive_on_missing() {
        assert!(rank_within(None, 100));
        assert!(rank_within(Some(80), 100));
        assert!(!rank_within(Some(180), 100));
    }

    #[test]
    fn test_offers_level_requires_open_program() {
        let inst = institution("A", "UK");
        let mut prog = program(inst.id(), DegreeLevel::Masters);
        prog.status = ProgramStatus::Closed;
        let programs = vec![prog];
        assert!(!institution_offers_level(
            inst.id(),
            &programs,
            DegreeLevel::Masters
        ));
    }

    #[test]
    fn test_offers_level_against_empty_collection_is_false() {
        let inst = institution("A", "UK");
        assert!(!institution_offers_level(inst.id(), &[], DegreeLevel::Masters));
    }

    #[test]
    fn test_offers_subject_sentinel_short_circuits() {
        let inst = institution("A", "UK");
        // no programs at all, but "all" must still pass
        assert!(institution_offers_subject(inst.id(), &[], "all"));
        assert!(!institution_offers_subject(inst.id(), &[], "Law"));
    }
}
