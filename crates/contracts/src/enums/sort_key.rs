use serde::{Deserialize, Serialize};

/// Ordering applied to a filtered catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Identity order: keep the input (relevance) order as-is
    Relevance,
    /// World ranking, best first; records without a ranking sort last
    RankingAsc,
    /// Name, A to Z
    NameAsc,
    /// Minimum tuition, lowest first; unknown fees sort low
    TuitionAsc,
    /// Maximum tuition, highest first; unknown fees sort low
    TuitionDesc,
}

impl SortKey {
    /// Stable code used in query strings
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::RankingAsc => "ranking",
            SortKey::NameAsc => "name",
            SortKey::TuitionAsc => "tuition_asc",
            SortKey::TuitionDesc => "tuition_desc",
        }
    }

    /// Human-readable name for the sort dropdown
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::RankingAsc => "Ranking",
            SortKey::NameAsc => "Name (A–Z)",
            SortKey::TuitionAsc => "Tuition (low to high)",
            SortKey::TuitionDesc => "Tuition (high to low)",
        }
    }

    /// All sort keys, in dropdown order
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Relevance,
            SortKey::RankingAsc,
            SortKey::NameAsc,
            SortKey::TuitionAsc,
            SortKey::TuitionDesc,
        ]
    }

    /// Parse from a query-string code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "relevance" => Some(SortKey::Relevance),
            "ranking" => Some(SortKey::RankingAsc),
            "name" => Some(SortKey::NameAsc),
            "tuition_asc" => Some(SortKey::TuitionAsc),
            "tuition_desc" => Some(SortKey::TuitionDesc),
            _ => None,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Relevance
    }
}
