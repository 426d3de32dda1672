use serde::{Deserialize, Serialize};

/// Size of the fixed campus-facility universe
pub const FACILITY_COUNT: usize = 7;

/// The fixed set of campus facilities tracked per institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampusFacility {
    Library,
    SportsCenter,
    StudentAccommodation,
    ResearchLabs,
    CareerServices,
    HealthcareCenter,
    InternationalOffice,
}

impl CampusFacility {
    /// Stable code used in stored records
    pub fn code(&self) -> &'static str {
        match self {
            CampusFacility::Library => "library",
            CampusFacility::SportsCenter => "sports_center",
            CampusFacility::StudentAccommodation => "student_accommodation",
            CampusFacility::ResearchLabs => "research_labs",
            CampusFacility::CareerServices => "career_services",
            CampusFacility::HealthcareCenter => "healthcare_center",
            CampusFacility::InternationalOffice => "international_office",
        }
    }

    /// Human-readable name for badge rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            CampusFacility::Library => "Library",
            CampusFacility::SportsCenter => "Sports Center",
            CampusFacility::StudentAccommodation => "Student Accommodation",
            CampusFacility::ResearchLabs => "Research Labs",
            CampusFacility::CareerServices => "Career Services",
            CampusFacility::HealthcareCenter => "Healthcare Center",
            CampusFacility::InternationalOffice => "International Office",
        }
    }

    /// The full facility universe, in display order
    pub fn all() -> Vec<CampusFacility> {
        vec![
            CampusFacility::Library,
            CampusFacility::SportsCenter,
            CampusFacility::StudentAccommodation,
            CampusFacility::ResearchLabs,
            CampusFacility::CareerServices,
            CampusFacility::HealthcareCenter,
            CampusFacility::InternationalOffice,
        ]
    }
}

/// Availability flags for the fixed facility universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampusFacilities {
    #[serde(default)]
    pub library: bool,
    #[serde(default)]
    pub sports_center: bool,
    #[serde(default)]
    pub student_accommodation: bool,
    #[serde(default)]
    pub research_labs: bool,
    #[serde(default)]
    pub career_services: bool,
    #[serde(default)]
    pub healthcare_center: bool,
    #[serde(default)]
    pub international_office: bool,
}

impl CampusFacilities {
    /// Whether a given facility is available
    pub fn is_available(&self, facility: CampusFacility) -> bool {
        match facility {
            CampusFacility::Library => self.library,
            CampusFacility::SportsCenter => self.sports_center,
            CampusFacility::StudentAccommodation => self.student_accommodation,
            CampusFacility::ResearchLabs => self.research_labs,
            CampusFacility::CareerServices => self.career_services,
            CampusFacility::HealthcareCenter => self.healthcare_center,
            CampusFacility::InternationalOffice => self.international_office,
        }
    }

    /// Count of available facilities out of the fixed universe
    pub fn available_count(&self) -> usize {
        CampusFacility::all()
            .into_iter()
            .filter(|f| self.is_available(*f))
            .count()
    }

    /// Available facilities in display order
    pub fn available(&self) -> Vec<CampusFacility> {
        CampusFacility::all()
            .into_iter()
            .filter(|f| self.is_available(*f))
            .collect()
    }
}
