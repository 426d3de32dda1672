use crate::usecases::common::{UseCaseError, UseCaseResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A comparison is only worth saving with at least two institutions
pub const MIN_COMPARED_INSTITUTIONS: usize = 2;

/// Payload handed to the saved-comparison sink
///
/// The sink assigns the persisted identifier and timestamp; this engine only
/// produces the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveComparisonRequest {
    pub name: String,

    #[serde(rename = "institutionIds")]
    pub institution_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SaveComparisonRequest {
    pub fn new(name: impl Into<String>, institution_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            institution_ids,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Caller-level preconditions for saving a comparison. The matrix builder
    /// itself degrades gracefully below two institutions; persisting such a
    /// comparison is rejected here instead.
    pub fn validate(&self) -> UseCaseResult<()> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::validation("Comparison name must not be empty"));
        }
        if self.institution_ids.len() < MIN_COMPARED_INSTITUTIONS {
            return Err(UseCaseError::precondition(format!(
                "A comparison needs at least {} institutions",
                MIN_COMPARED_INSTITUTIONS
            )));
        }
        let unique: HashSet<&String> = self.institution_ids.iter().collect();
        if unique.len() != self.institution_ids.len() {
            return Err(UseCaseError::validation(
                "Comparison contains duplicate institutions",
            ));
        }
        Ok(())
    }
}
