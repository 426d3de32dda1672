//! Catalog source boundary
//!
//! The engine consumes the catalog through this read-only interface. Status
//! scoping happens here: inactive institutions and closed programs never
//! reach the discovery pipeline, which is why the filter engine carries no
//! status predicate of its own.

use contracts::domain::a001_institution::Institution;
use contracts::domain::a002_program::Program;
use contracts::enums::{InstitutionStatus, ProgramStatus};

/// Read-only view of the institution and program collections
pub trait CatalogSource {
    /// Institutions, optionally restricted to a status
    fn list_institutions(&self, status: Option<InstitutionStatus>) -> Vec<Institution>;

    /// Programs, optionally restricted to a status
    fn list_programs(&self, status: Option<ProgramStatus>) -> Vec<Program>;

    /// The institutions that participate in discovery
    fn discoverable_institutions(&self) -> Vec<Institution> {
        self.list_institutions(Some(InstitutionStatus::Active))
    }

    /// The programs that participate in discovery
    fn discoverable_programs(&self) -> Vec<Program> {
        self.list_programs(Some(ProgramStatus::Open))
    }
}

/// Catalog snapshot held in memory, the shape the engine is handed once the
/// real (possibly asynchronous) collaborator has resolved
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    institutions: Vec<Institution>,
    programs: Vec<Program>,
}

impl InMemoryCatalog {
    pub fn new(institutions: Vec<Institution>, programs: Vec<Program>) -> Self {
        Self {
            institutions,
            programs,
        }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn list_institutions(&self, status: Option<InstitutionStatus>) -> Vec<Institution> {
        self.institutions
            .iter()
            .filter(|inst| status.map_or(true, |s| inst.status == s))
            .cloned()
            .collect()
    }

    fn list_programs(&self, status: Option<ProgramStatus>) -> Vec<Program> {
        self.programs
            .iter()
            .filter(|program| status.map_or(true, |s| program.status == s))
            .cloned()
            .collect()
    }
}
