use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{CampusFacilities, InstitutionStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstitutionId(pub Uuid);

impl InstitutionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InstitutionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InstitutionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(flatten)]
    pub base: BaseAggregate<InstitutionId>,

    pub city: String,

    pub country: String,

    /// Composite world ranking; unknown for many smaller institutions
    pub ranking: Option<u32>,

    #[serde(rename = "qsRanking")]
    pub qs_ranking: Option<u32>,

    #[serde(rename = "timesRanking")]
    pub times_ranking: Option<u32>,

    #[serde(rename = "studentPopulation")]
    pub student_population: Option<u64>,

    #[serde(rename = "internationalStudentsPercent")]
    pub international_students_percent: Option<f64>,

    #[serde(rename = "acceptanceRate")]
    pub acceptance_rate: Option<f64>,

    #[serde(rename = "tuitionMin")]
    pub tuition_min: Option<f64>,

    #[serde(rename = "tuitionMax")]
    pub tuition_max: Option<f64>,

    #[serde(rename = "tuitionCurrency")]
    pub tuition_currency: Option<String>,

    /// Staff-to-student ratio as published, e.g. "1:14"
    #[serde(rename = "facultyRatio")]
    pub faculty_ratio: Option<String>,

    #[serde(rename = "employabilityPercent")]
    pub employability_percent: Option<f64>,

    #[serde(rename = "researchScore")]
    pub research_score: Option<f64>,

    #[serde(rename = "satisfactionScore")]
    pub satisfaction_score: Option<f64>,

    #[serde(rename = "entryRequirementsSummary")]
    pub entry_requirements_summary: Option<String>,

    #[serde(rename = "scholarshipsSummary")]
    pub scholarships_summary: Option<String>,

    pub about: Option<String>,

    /// Subject label to published rank; a known subject may have no rank yet
    #[serde(rename = "programRankings", default)]
    pub program_rankings: BTreeMap<String, Option<u32>>,

    #[serde(rename = "campusFacilities", default)]
    pub campus_facilities: CampusFacilities,

    /// Intake labels as stored: comma- and/or slash-delimited, e.g. "Sep, Jan / May"
    pub intakes: Option<String>,

    pub status: InstitutionStatus,
}

impl Institution {
    pub fn new_for_insert(code: String, name: String, city: String, country: String) -> Self {
        Self {
            base: BaseAggregate::new(InstitutionId::new_v4(), code, name),
            city,
            country,
            ranking: None,
            qs_ranking: None,
            times_ranking: None,
            student_population: None,
            international_students_percent: None,
            acceptance_rate: None,
            tuition_min: None,
            tuition_max: None,
            tuition_currency: None,
            faculty_ratio: None,
            employability_percent: None,
            research_score: None,
            satisfaction_score: None,
            entry_requirements_summary: None,
            scholarships_summary: None,
            about: None,
            program_rankings: BTreeMap::new(),
            campus_facilities: CampusFacilities::default(),
            intakes: None,
            status: InstitutionStatus::Active,
        }
    }

    /// Official institution name
    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Intake labels split on comma or slash, trimmed, empties dropped
    pub fn intake_list(&self) -> Vec<String> {
        match &self.intakes {
            Some(raw) => raw
                .split(|c| c == ',' || c == '/')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &InstitutionDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.city = dto.city.clone().unwrap_or_default();
        self.country = dto.country.clone().unwrap_or_default();
        self.ranking = dto.ranking;
        self.qs_ranking = dto.qs_ranking;
        self.times_ranking = dto.times_ranking;
        self.student_population = dto.student_population;
        self.international_students_percent = dto.international_students_percent;
        self.acceptance_rate = dto.acceptance_rate;
        self.tuition_min = dto.tuition_min;
        self.tuition_max = dto.tuition_max;
        self.tuition_currency = dto.tuition_currency.clone();
        self.faculty_ratio = dto.faculty_ratio.clone();
        self.employability_percent = dto.employability_percent;
        self.research_score = dto.research_score;
        self.satisfaction_score = dto.satisfaction_score;
        self.entry_requirements_summary = dto.entry_requirements_summary.clone();
        self.scholarships_summary = dto.scholarships_summary.clone();
        self.about = dto.about.clone();
        if let Some(rankings) = &dto.program_rankings {
            self.program_rankings = rankings.clone();
        }
        if let Some(facilities) = dto.campus_facilities {
            self.campus_facilities = facilities;
        }
        self.intakes = dto.intakes.clone();
        if let Some(status) = dto.status {
            self.status = status;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Institution name must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Institution code must not be empty".into());
        }
        if self.country.trim().is_empty() {
            return Err("Country must not be empty".into());
        }
        for (label, value) in [
            ("International students", self.international_students_percent),
            ("Acceptance rate", self.acceptance_rate),
            ("Employability", self.employability_percent),
        ] {
            if let Some(v) = value {
                if !(0.0..=100.0).contains(&v) {
                    return Err(format!("{} must be a percentage between 0 and 100", label));
                }
            }
        }
        if let (Some(lo), Some(hi)) = (self.tuition_min, self.tuition_max) {
            if lo > hi {
                return Err("Minimum tuition must not exceed maximum tuition".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Institution {
    type Id = InstitutionId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "institution"
    }

    fn element_name() -> &'static str {
        "Institution"
    }

    fn list_name() -> &'static str {
        "Institutions"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InstitutionDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub comment: Option<String>,
    pub ranking: Option<u32>,
    #[serde(rename = "qsRanking")]
    pub qs_ranking: Option<u32>,
    #[serde(rename = "timesRanking")]
    pub times_ranking: Option<u32>,
    #[serde(rename = "studentPopulation")]
    pub student_population: Option<u64>,
    #[serde(rename = "internationalStudentsPercent")]
    pub international_students_percent: Option<f64>,
    #[serde(rename = "acceptanceRate")]
    pub acceptance_rate: Option<f64>,
    #[serde(rename = "tuitionMin")]
    pub tuition_min: Option<f64>,
    #[serde(rename = "tuitionMax")]
    pub tuition_max: Option<f64>,
    #[serde(rename = "tuitionCurrency")]
    pub tuition_currency: Option<String>,
    #[serde(rename = "facultyRatio")]
    pub faculty_ratio: Option<String>,
    #[serde(rename = "employabilityPercent")]
    pub employability_percent: Option<f64>,
    #[serde(rename = "researchScore")]
    pub research_score: Option<f64>,
    #[serde(rename = "satisfactionScore")]
    pub satisfaction_score: Option<f64>,
    #[serde(rename = "entryRequirementsSummary")]
    pub entry_requirements_summary: Option<String>,
    #[serde(rename = "scholarshipsSummary")]
    pub scholarships_summary: Option<String>,
    pub about: Option<String>,
    #[serde(rename = "programRankings")]
    pub program_rankings: Option<BTreeMap<String, Option<u32>>>,
    #[serde(rename = "campusFacilities")]
    pub campus_facilities: Option<CampusFacilities>,
    pub intakes: Option<String>,
    pub status: Option<InstitutionStatus>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
