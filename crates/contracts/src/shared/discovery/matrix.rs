use crate::domain::a001_institution::InstitutionId;
use crate::enums::{CampusFacilities, FACILITY_COUNT};
use serde::{Deserialize, Serialize};

/// The fixed metric-row universe of a comparison matrix, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Ranking,
    Tuition,
    StudentPopulation,
    AcceptanceRate,
    QsRanking,
    PopularFields,
    EntryRequirements,
    Scholarships,
    ProgramCount,
    FacultyRatio,
    Employability,
    ResearchScore,
    SatisfactionScore,
    ProgramRankings,
    Facilities,
    Intakes,
}

impl Metric {
    /// Row label shown in the comparison table
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Ranking => "World Ranking",
            Metric::Tuition => "Tuition Fees",
            Metric::StudentPopulation => "Student Population",
            Metric::AcceptanceRate => "Acceptance Rate",
            Metric::QsRanking => "QS Ranking",
            Metric::PopularFields => "Popular Fields",
            Metric::EntryRequirements => "Entry Requirements",
            Metric::Scholarships => "Scholarships",
            Metric::ProgramCount => "Programs Offered",
            Metric::FacultyRatio => "Faculty Ratio",
            Metric::Employability => "Employability",
            Metric::ResearchScore => "Research Score",
            Metric::SatisfactionScore => "Student Satisfaction",
            Metric::ProgramRankings => "Program Rankings",
            Metric::Facilities => "Campus Facilities",
            Metric::Intakes => "Intakes",
        }
    }

    /// All metric rows in the fixed display order
    pub fn all() -> Vec<Metric> {
        vec![
            Metric::Ranking,
            Metric::Tuition,
            Metric::StudentPopulation,
            Metric::AcceptanceRate,
            Metric::QsRanking,
            Metric::PopularFields,
            Metric::EntryRequirements,
            Metric::Scholarships,
            Metric::ProgramCount,
            Metric::FacultyRatio,
            Metric::Employability,
            Metric::ResearchScore,
            Metric::SatisfactionScore,
            Metric::ProgramRankings,
            Metric::Facilities,
            Metric::Intakes,
        ]
    }
}

/// One cell of the comparison matrix
///
/// A metric absent on an institution is an explicit `Missing` cell, never an
/// omitted one: the matrix stays rectangular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricCell {
    Integer { value: i64 },
    Number { value: f64 },
    Text { value: String },
    List { values: Vec<String> },
    Facilities { flags: CampusFacilities },
    Missing,
}

impl MetricCell {
    pub fn is_missing(&self) -> bool {
        matches!(self, MetricCell::Missing)
    }

    /// Render the cell for a plain-text table; absent data shows as "N/A"
    pub fn display(&self) -> String {
        match self {
            MetricCell::Integer { value } => value.to_string(),
            MetricCell::Number { value } => format!("{}", value),
            MetricCell::Text { value } => value.clone(),
            MetricCell::List { values } => {
                if values.is_empty() {
                    "N/A".to_string()
                } else {
                    values.join(", ")
                }
            }
            MetricCell::Facilities { flags } => {
                format!("{}/{}", flags.available_count(), FACILITY_COUNT)
            }
            MetricCell::Missing => "N/A".to_string(),
        }
    }
}

/// Column header of the comparison matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixColumn {
    #[serde(rename = "institutionId")]
    pub institution_id: InstitutionId,
    pub name: String,
}

/// One metric row: label plus one cell per selected institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub metric: Metric,
    pub label: String,
    pub cells: Vec<MetricCell>,
}

/// Derived, never persisted: built fresh from current catalog data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub columns: Vec<MatrixColumn>,
    pub rows: Vec<MatrixRow>,
}

impl ComparisonMatrix {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Every row carries exactly one cell per column
    pub fn is_rectangular(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.cells.len() == self.columns.len())
    }

    /// Look up a row by metric
    pub fn row(&self, metric: Metric) -> Option<&MatrixRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }
}
