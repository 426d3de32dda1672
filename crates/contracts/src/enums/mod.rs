pub mod campus_facility;
pub mod degree_level;
pub mod ranking;
pub mod sort_key;
pub mod status;

pub use campus_facility::{CampusFacilities, CampusFacility, FACILITY_COUNT};
pub use degree_level::DegreeLevel;
pub use ranking::{RankingKind, RankingTier};
pub use sort_key::SortKey;
pub use status::{InstitutionStatus, ProgramStatus};
