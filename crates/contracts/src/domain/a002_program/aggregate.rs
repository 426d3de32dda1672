use crate::domain::a001_institution::InstitutionId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{DegreeLevel, ProgramStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub Uuid);

impl ProgramId {
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

impl AggregateId for ProgramId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProgramId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(flatten)]
    pub base: BaseAggregate<ProgramId>,

    /// Owning institution; referential back-reference only
    #[serde(rename = "institutionId")]
    pub institution_id: InstitutionId,

    #[serde(rename = "subjectArea")]
    pub subject_area: String,

    pub level: DegreeLevel,

    /// Published duration, e.g. "3 years"
    pub duration: Option<String>,

    #[serde(rename = "tuitionMin")]
    pub tuition_min: Option<f64>,

    #[serde(rename = "tuitionMax")]
    pub tuition_max: Option<f64>,

    #[serde(rename = "tuitionCurrency")]
    pub tuition_currency: Option<String>,

    #[serde(rename = "scholarshipAvailable", default)]
    pub scholarship_available: bool,

    /// Denormalized copy of the institution's country so the program-first
    /// page filters by country without a join
    pub country: String,

    pub status: ProgramStatus,
}

impl Program {
    pub fn new_for_insert(
        code: String,
        title: String,
        institution_id: InstitutionId,
        subject_area: String,
        level: DegreeLevel,
        country: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProgramId::new_v4(), code, title),
            institution_id,
            subject_area,
            level,
            duration: None,
            tuition_min: None,
            tuition_max: None,
            tuition_currency: None,
            scholarship_available: false,
            country,
            status: ProgramStatus::Open,
        }
    }

    /// Program title
    pub fn title(&self) -> &str {
        &self.base.description
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &ProgramDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.title.clone();
        self.base.comment = dto.comment.clone();
        self.subject_area = dto.subject_area.clone().unwrap_or_default();
        if let Some(level) = dto.level {
            self.level = level;
        }
        self.duration = dto.duration.clone();
        self.tuition_min = dto.tuition_min;
        self.tuition_max = dto.tuition_max;
        self.tuition_currency = dto.tuition_currency.clone();
        if let Some(scholarship) = dto.scholarship_available {
            self.scholarship_available = scholarship;
        }
        self.country = dto.country.clone().unwrap_or_default();
        if let Some(status) = dto.status {
            self.status = status;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Program title must not be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Program code must not be empty".into());
        }
        if self.subject_area.trim().is_empty() {
            return Err("Subject area must not be empty".into());
        }
        if self.country.trim().is_empty() {
            return Err("Country must not be empty".into());
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

impl AggregateRoot for Program {
    type Id = ProgramId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "program"
    }

    fn element_name() -> &'static str {
        "Program"
    }

    fn list_name() -> &'static str {
        "Programs"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgramDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub title: String,
    #[serde(rename = "institutionId")]
    pub institution_id: Option<String>,
    #[serde(rename = "subjectArea")]
    pub subject_area: Option<String>,
    pub level: Option<DegreeLevel>,
    pub duration: Option<String>,
    #[serde(rename = "tuitionMin")]
    pub tuition_min: Option<f64>,
    #[serde(rename = "tuitionMax")]
    pub tuition_max: Option<f64>,
    #[serde(rename = "tuitionCurrency")]
    pub tuition_currency: Option<String>,
    #[serde(rename = "scholarshipAvailable")]
    pub scholarship_available: Option<bool>,
    pub country: Option<String>,
    pub comment: Option<String>,
    pub status: Option<ProgramStatus>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
