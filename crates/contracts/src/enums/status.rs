use serde::{Deserialize, Serialize};

/// Publication status of an institution
///
/// Institutions that are not `Active` are excluded from discovery at the
/// catalog store boundary, not by the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionStatus {
    Active,
    Inactive,
}

impl InstitutionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InstitutionStatus::Active => "active",
            InstitutionStatus::Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(InstitutionStatus::Active),
            "inactive" => Some(InstitutionStatus::Inactive),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, InstitutionStatus::Active)
    }
}

/// Admission status of a program
///
/// Only `Open` programs participate in discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    Open,
    Closed,
}

impl ProgramStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProgramStatus::Open => "open",
            ProgramStatus::Closed => "closed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(ProgramStatus::Open),
            "closed" => Some(ProgramStatus::Closed),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ProgramStatus::Open)
    }
}
