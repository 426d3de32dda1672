use crate::enums::{DegreeLevel, RankingKind, RankingTier};
use serde::{Deserialize, Serialize};

/// Sentinel value UI selectors send for "no restriction"
pub const ALL_SENTINEL: &str = "all";

/// Whether a selector value means "no restriction"
pub fn is_all_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL)
}

/// Helper function for serde skip
fn is_false(value: &bool) -> bool {
    !*value
}

/// Inclusive numeric range criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub lo: f64,
    pub hi: f64,
}

impl NumericRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Range with bounds swapped if inverted and negatives clamped to zero
    pub fn normalized(&self) -> Self {
        let (lo, hi) = if self.lo <= self.hi {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };
        Self {
            lo: lo.max(0.0),
            hi: hi.max(0.0),
        }
    }

    /// Whether the bounds are ordered
    pub fn is_valid(&self) -> bool {
        self.lo <= self.hi
    }

    /// Range membership with the permissive-on-missing policy: a record
    /// without a value is never excluded by a range criterion.
    pub fn contains(&self, value: Option<f64>) -> bool {
        match value {
            Some(v) => v >= self.lo && v <= self.hi,
            None => true,
        }
    }
}

/// Coarse "top-N" ranking criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingTierFilter {
    pub kind: RankingKind,
    pub tier: RankingTier,
}

/// Continuous ranking-position criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingRangeFilter {
    pub kind: RankingKind,
    pub range: NumericRange,
}

/// The current filter selections of a discovery page
///
/// An immutable value object rebuilt per session, optionally seeded from
/// query-string parameters. Every dimension defaults to its neutral value;
/// the filter engine skips neutral dimensions entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Criteria {
    /// Free-text search; empty means inactive
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,

    /// Selected countries; empty means all (single-select pages send one)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<DegreeLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,

    /// Tuition range in catalog currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuition: Option<NumericRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_tier: Option<RankingTierFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_range: Option<RankingRangeFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<NumericRange>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub scholarship_only: bool,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to a single country (the single-select pages)
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.countries = vec![country.into()];
        self
    }

    /// Restrict to a country set (the multi-select pages)
    pub fn with_countries(mut self, countries: Vec<String>) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_level(mut self, level: DegreeLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_field_of_study(mut self, field: impl Into<String>) -> Self {
        self.field_of_study = Some(field.into());
        self
    }

    pub fn with_tuition(mut self, lo: f64, hi: f64) -> Self {
        self.tuition = Some(NumericRange::new(lo, hi));
        self
    }

    pub fn with_ranking_tier(mut self, kind: RankingKind, tier: RankingTier) -> Self {
        self.ranking_tier = Some(RankingTierFilter { kind, tier });
        self
    }

    pub fn with_ranking_range(mut self, kind: RankingKind, lo: f64, hi: f64) -> Self {
        self.ranking_range = Some(RankingRangeFilter {
            kind,
            range: NumericRange::new(lo, hi),
        });
        self
    }

    pub fn with_population(mut self, lo: f64, hi: f64) -> Self {
        self.population = Some(NumericRange::new(lo, hi));
        self
    }

    pub fn with_scholarship_only(mut self, scholarship_only: bool) -> Self {
        self.scholarship_only = scholarship_only;
        self
    }

    /// Whether any dimension is active
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.countries.iter().all(|c| is_all_sentinel(c))
            || self.level.is_some()
            || self
                .field_of_study
                .as_deref()
                .map(|f| !is_all_sentinel(f))
                .unwrap_or(false)
            || self.tuition.is_some()
            || self.ranking_tier.is_some()
            || self.ranking_range.is_some()
            || self.population.is_some()
            || self.scholarship_only
    }

    /// Canonical form: sentinel selector values mapped to neutral, selector
    /// text trimmed, and every range normalized. Invalid ranges are repaired
    /// here (swap, clamp), never silently inverted downstream.
    pub fn normalized(&self) -> Self {
        Self {
            query: self.query.trim().to_string(),
            countries: self
                .countries
                .iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !is_all_sentinel(c))
                .collect(),
            level: self.level,
            field_of_study: self
                .field_of_study
                .as_deref()
                .map(str::trim)
                .filter(|f| !is_all_sentinel(f))
                .map(str::to_string),
            tuition: self.tuition.map(|r| r.normalized()),
            ranking_tier: self.ranking_tier,
            ranking_range: self.ranking_range.map(|f| RankingRangeFilter {
                kind: f.kind,
                range: f.range.normalized(),
            }),
            population: self.population.map(|r| r.normalized()),
            scholarship_only: self.scholarship_only,
        }
    }
}
