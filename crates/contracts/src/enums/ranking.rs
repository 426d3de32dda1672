use serde::{Deserialize, Serialize};

/// Which ranking column a ranking criterion reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingKind {
    /// Composite world ranking
    Overall,
    /// QS World University Rankings
    Qs,
    /// Times Higher Education ranking
    Times,
}

impl RankingKind {
    pub fn code(&self) -> &'static str {
        match self {
            RankingKind::Overall => "overall",
            RankingKind::Qs => "qs",
            RankingKind::Times => "times",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RankingKind::Overall => "World Ranking",
            RankingKind::Qs => "QS Ranking",
            RankingKind::Times => "Times Ranking",
        }
    }

    pub fn all() -> Vec<RankingKind> {
        vec![RankingKind::Overall, RankingKind::Qs, RankingKind::Times]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "overall" => Some(RankingKind::Overall),
            "qs" => Some(RankingKind::Qs),
            "times" => Some(RankingKind::Times),
            _ => None,
        }
    }
}

/// Coarse "top-N" ranking tier selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingTier {
    Top50,
    Top100,
    Top200,
    Top500,
}

impl RankingTier {
    /// Highest (numerically largest) rank admitted by the tier
    pub fn max_rank(&self) -> u32 {
        match self {
            RankingTier::Top50 => 50,
            RankingTier::Top100 => 100,
            RankingTier::Top200 => 200,
            RankingTier::Top500 => 500,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RankingTier::Top50 => "top50",
            RankingTier::Top100 => "top100",
            RankingTier::Top200 => "top200",
            RankingTier::Top500 => "top500",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RankingTier::Top50 => "Top 50",
            RankingTier::Top100 => "Top 100",
            RankingTier::Top200 => "Top 200",
            RankingTier::Top500 => "Top 500",
        }
    }

    pub fn all() -> Vec<RankingTier> {
        vec![
            RankingTier::Top50,
            RankingTier::Top100,
            RankingTier::Top200,
            RankingTier::Top500,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "top50" => Some(RankingTier::Top50),
            "top100" => Some(RankingTier::Top100),
            "top200" => Some(RankingTier::Top200),
            "top500" => Some(RankingTier::Top500),
            _ => None,
        }
    }
}
