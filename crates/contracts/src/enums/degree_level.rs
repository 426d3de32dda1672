use serde::{Deserialize, Serialize};

/// Degree levels offered by catalog programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Foundation,
    Diploma,
    Bachelors,
    Masters,
    Doctorate,
}

impl DegreeLevel {
    /// Stable code used in query strings and stored records
    pub fn code(&self) -> &'static str {
        match self {
            DegreeLevel::Foundation => "foundation",
            DegreeLevel::Diploma => "diploma",
            DegreeLevel::Bachelors => "bachelors",
            DegreeLevel::Masters => "masters",
            DegreeLevel::Doctorate => "doctorate",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DegreeLevel::Foundation => "Foundation",
            DegreeLevel::Diploma => "Diploma",
            DegreeLevel::Bachelors => "Bachelor's",
            DegreeLevel::Masters => "Master's",
            DegreeLevel::Doctorate => "Doctorate",
        }
    }

    /// All degree levels
    pub fn all() -> Vec<DegreeLevel> {
        vec![
            DegreeLevel::Foundation,
            DegreeLevel::Diploma,
            DegreeLevel::Bachelors,
            DegreeLevel::Masters,
            DegreeLevel::Doctorate,
        ]
    }

    /// Parse from a stored code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "foundation" => Some(DegreeLevel::Foundation),
            "diploma" => Some(DegreeLevel::Diploma),
            "bachelors" => Some(DegreeLevel::Bachelors),
            "masters" => Some(DegreeLevel::Masters),
            "doctorate" => Some(DegreeLevel::Doctorate),
            _ => None,
        }
    }
}

impl std::fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
