use crate::domain::a001_institution::InstitutionId;
use crate::domain::common::AggregateId;
use crate::usecases::u501_save_comparison::SaveComparisonRequest;
use serde::{Deserialize, Serialize};

/// Ordered set of institutions picked for side-by-side comparison
///
/// Insertion order matters for display; an id can appear only once. Adding a
/// present id and removing an absent id are both no-ops. There is no hard
/// cap; any limit is a UI convenience.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonSelection {
    ids: Vec<InstitutionId>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an id list, dropping duplicates while keeping first-seen order
    pub fn from_ids(ids: impl IntoIterator<Item = InstitutionId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            selection.add(id);
        }
        selection
    }

    /// Add an id; returns false (no-op) when already present
    pub fn add(&mut self, id: InstitutionId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id; returns false (no-op) when absent
    pub fn remove(&mut self, id: InstitutionId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    /// Add when absent, remove when present
    pub fn toggle(&mut self, id: InstitutionId) {
        if !self.add(id) {
            self.remove(id);
        }
    }

    pub fn contains(&self, id: InstitutionId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> &[InstitutionId] {
        &self.ids
    }

    /// Payload for the saved-comparison sink; the sink assigns the persisted
    /// identifier and timestamp.
    pub fn save_request(
        &self,
        name: impl Into<String>,
        notes: Option<String>,
    ) -> SaveComparisonRequest {
        SaveComparisonRequest {
            name: name.into(),
            institution_ids: self.ids.iter().map(AggregateId::as_string).collect(),
            notes,
        }
    }
}
