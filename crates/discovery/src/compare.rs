//! Comparison matrix builder
//!
//! Builds the side-by-side table for a set of selected institutions from
//! current catalog data. Derived metrics (popular fields, facility coverage,
//! program count) come from the restricted program set; everything else is
//! read off the institution record. The matrix is always rectangular: a
//! metric absent on an institution becomes an explicit `Missing` cell.

use contracts::domain::a001_institution::Institution;
use contracts::domain::a002_program::Program;
use contracts::domain::common::AggregateRoot;
use contracts::shared::discovery::{ComparisonMatrix, MatrixColumn, MatrixRow, Metric, MetricCell};

/// How many subject labels the popular-fields row shows per institution
pub const POPULAR_FIELDS_TOP: usize = 3;

/// Build the comparison matrix for the selected institutions (order
/// preserved) against the full program set.
///
/// Programs referencing an institution outside the selection, unknown
/// institutions, or carrying a closed status are excluded silently. The
/// builder accepts any selection size, including 0 and 1 — the 2+ minimum is
/// a caller-level precondition enforced when saving, not here.
pub fn build_comparison_matrix(
    selected: &[Institution],
    programs: &[Program],
) -> ComparisonMatrix {
    let columns: Vec<MatrixColumn> = selected
        .iter()
        .map(|inst| MatrixColumn {
            institution_id: inst.id(),
            name: inst.name().to_string(),
        })
        .collect();

    // restrict once per institution: own, open programs only
    let restricted: Vec<Vec<&Program>> = selected
        .iter()
        .map(|inst| {
            programs
                .iter()
                .filter(|program| {
                    program.institution_id == inst.id() && program.status.is_open()
                })
                .collect()
        })
        .collect();

    let rows: Vec<MatrixRow> = Metric::all()
        .into_iter()
        .map(|metric| MatrixRow {
            metric,
            label: metric.label().to_string(),
            cells: selected
                .iter()
                .zip(&restricted)
                .map(|(inst, inst_programs)| metric_cell(metric, inst, inst_programs))
                .collect(),
        })
        .collect();

    ComparisonMatrix { columns, rows }
}

fn metric_cell(metric: Metric, inst: &Institution, inst_programs: &[&Program]) -> MetricCell {
    match metric {
        Metric::Ranking => rank_cell(inst.ranking),
        Metric::Tuition => tuition_cell(inst),
        Metric::StudentPopulation => match inst.student_population {
            Some(population) => MetricCell::Integer {
                value: population as i64,
            },
            None => MetricCell::Missing,
        },
        Metric::AcceptanceRate => percent_cell(inst.acceptance_rate),
        Metric::QsRanking => rank_cell(inst.qs_ranking),
        Metric::PopularFields => MetricCell::List {
            values: popular_fields(inst_programs, POPULAR_FIELDS_TOP),
        },
        Metric::EntryRequirements => text_cell(inst.entry_requirements_summary.as_deref()),
        Metric::Scholarships => text_cell(inst.scholarships_summary.as_deref()),
        Metric::ProgramCount => MetricCell::Integer {
            value: inst_programs.len() as i64,
        },
        Metric::FacultyRatio => text_cell(inst.faculty_ratio.as_deref()),
        Metric::Employability => percent_cell(inst.employability_percent),
        Metric::ResearchScore => number_cell(inst.research_score),
        Metric::SatisfactionScore => number_cell(inst.satisfaction_score),
        Metric::ProgramRankings => MetricCell::List {
            values: inst
                .program_rankings
                .iter()
                .filter_map(|(subject, rank)| rank.map(|r| format!("{} (#{})", subject, r)))
                .collect(),
        },
        Metric::Facilities => MetricCell::Facilities {
            flags: inst.campus_facilities,
        },
        Metric::Intakes => MetricCell::List {
            values: inst.intake_list(),
        },
    }
}

/// Top subject areas of the restricted program set: grouped by label,
/// counted, ordered by descending count. The sort is stable on the derived
/// count key, so tied subjects keep their first-seen order.
fn popular_fields(programs: &[&Program], top: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for program in programs {
        match counts
            .iter_mut()
            .find(|(subject, _)| *subject == program.subject_area)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((program.subject_area.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(top)
        .map(|(subject, _)| subject)
        .collect()
}

fn rank_cell(rank: Option<u32>) -> MetricCell {
    match rank {
        Some(value) => MetricCell::Integer {
            value: i64::from(value),
        },
        None => MetricCell::Missing,
    }
}

fn number_cell(value: Option<f64>) -> MetricCell {
    match value {
        Some(value) => MetricCell::Number { value },
        None => MetricCell::Missing,
    }
}

fn percent_cell(value: Option<f64>) -> MetricCell {
    match value {
        Some(value) => MetricCell::Text {
            value: format!("{}%", value),
        },
        None => MetricCell::Missing,
    }
}

fn text_cell(value: Option<&str>) -> MetricCell {
    match value {
        Some(text) if !text.trim().is_empty() => MetricCell::Text {
            value: text.to_string(),
        },
        _ => MetricCell::Missing,
    }
}

/// Tuition range with its currency tag, e.g. "10000–20000 GBP"
fn tuition_cell(inst: &Institution) -> MetricCell {
    let currency = inst.tuition_currency.as_deref().unwrap_or("").trim();
    let suffix = if currency.is_empty() {
        String::new()
    } else {
        format!(" {}", currency)
    };
    match (inst.tuition_min, inst.tuition_max) {
        (Some(lo), Some(hi)) => MetricCell::Text {
            value: format!("{}–{}{}", lo, hi, suffix),
        },
        (Some(lo), None) => MetricCell::Text {
            value: format!("from {}{}", lo, suffix),
        },
        (None, Some(hi)) => MetricCell::Text {
            value: format!("up to {}{}", hi, suffix),
        },
        (None, None) => MetricCell::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{DegreeLevel, ProgramStatus};

    fn institution(name: &str) -> Institution {
        Institution::new_for_insert("INST".into(), name.into(), "City".into(), "UK".into())
    }

    fn program(inst: &Institution, subject: &str) -> Program {
        Program::new_for_insert(
            "PRG".into(),
            subject.into(),
            inst.id(),
            subject.into(),
            DegreeLevel::Bachelors,
            "UK".into(),
        )
    }

    fn list_cell(matrix: &ComparisonMatrix, metric: Metric, column: usize) -> Vec<String> {
        match &matrix.row(metric).unwrap().cells[column] {
            MetricCell::List { values } => values.clone(),
            other => panic!("expected list cell, got {:?}", other),
        }
    }

    #[test]
    fn test_popular_fields_ranked_by_count_with_first_seen_ties() {
        let a = institution("A");
        let b = institution("B");
        let programs = vec![
            program(&a, "Law"),
            program(&a, "Law"),
            program(&a, "Arts"),
        ];
        let matrix = build_comparison_matrix(&[a, b], &programs);

        assert_eq!(
            list_cell(&matrix, Metric::PopularFields, 0),
            vec!["Law", "Arts"]
        );
        assert!(list_cell(&matrix, Metric::PopularFields, 1).is_empty());
    }

    #[test]
    fn test_popular_fields_tie_keeps_first_seen_order() {
        let a = institution("A");
        let programs = vec![
            program(&a, "Business"),
            program(&a, "Engineering"),
            program(&a, "Business"),
            program(&a, "Engineering"),
            program(&a, "Medicine"),
        ];
        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &programs);
        assert_eq!(
            list_cell(&matrix, Metric::PopularFields, 0),
            vec!["Business", "Engineering", "Medicine"]
        );
    }

    #[test]
    fn test_closed_and_orphan_programs_are_excluded() {
        let a = institution("A");
        let stranger = institution("Not Selected");
        let mut closed = program(&a, "Law");
        closed.status = ProgramStatus::Closed;
        let programs = vec![closed, program(&stranger, "Arts"), program(&a, "Law")];

        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &programs);
        match &matrix.row(Metric::ProgramCount).unwrap().cells[0] {
            MetricCell::Integer { value } => assert_eq!(*value, 1),
            other => panic!("expected integer cell, got {:?}", other),
        }
    }

    #[test]
    fn test_matrix_is_rectangular_for_any_selection_size() {
        let a = institution("A");
        let b = institution("B");

        let empty = build_comparison_matrix(&[], &[]);
        assert_eq!(empty.column_count(), 0);
        assert!(empty.is_rectangular());

        let single = build_comparison_matrix(std::slice::from_ref(&a), &[]);
        assert_eq!(single.column_count(), 1);
        assert!(single.is_rectangular());

        let pair = build_comparison_matrix(&[a, b], &[]);
        assert_eq!(pair.column_count(), 2);
        assert!(pair.is_rectangular());
        assert_eq!(pair.rows.len(), Metric::all().len());
    }

    #[test]
    fn test_absent_metrics_render_na_cells() {
        let a = institution("A");
        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &[]);
        let ranking = &matrix.row(Metric::Ranking).unwrap().cells[0];
        assert!(ranking.is_missing());
        assert_eq!(ranking.display(), "N/A");
    }

    #[test]
    fn test_facility_coverage_counts_the_fixed_universe() {
        let mut a = institution("A");
        a.campus_facilities.library = true;
        a.campus_facilities.career_services = true;
        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &[]);
        let cell = &matrix.row(Metric::Facilities).unwrap().cells[0];
        assert_eq!(cell.display(), "2/7");
    }

    #[test]
    fn test_tuition_cell_carries_currency_tag() {
        let mut a = institution("A");
        a.tuition_min = Some(10_000.0);
        a.tuition_max = Some(20_000.0);
        a.tuition_currency = Some("GBP".into());
        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &[]);
        let cell = &matrix.row(Metric::Tuition).unwrap().cells[0];
        assert_eq!(cell.display(), "10000–20000 GBP");
    }

    #[test]
    fn test_intakes_row_splits_mixed_delimiters() {
        let mut a = institution("A");
        a.intakes = Some("September / January, May".into());
        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &[]);
        assert_eq!(
            list_cell(&matrix, Metric::Intakes, 0),
            vec!["September", "January", "May"]
        );
    }

    #[test]
    fn test_program_rankings_skip_unranked_subjects() {
        let mut a = institution("A");
        a.program_rankings.insert("Arts".into(), None);
        a.program_rankings.insert("Law".into(), Some(5));
        let matrix = build_comparison_matrix(std::slice::from_ref(&a), &[]);
        assert_eq!(
            list_cell(&matrix, Metric::ProgramRankings, 0),
            vec!["Law (#5)"]
        );
    }
}
