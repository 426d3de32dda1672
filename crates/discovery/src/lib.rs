//! Catalog discovery & comparison engine
//!
//! A deterministic, fully client-evaluable filter/sort/suggest/aggregate
//! pipeline over the institution and program catalog. Every operation is a
//! pure function over in-memory snapshots: no I/O, no internal state, safe
//! to re-run on every input change and to call from multiple threads on
//! shared read-only data.

pub mod compare;
pub mod error;
pub mod filter;
pub mod predicates;
pub mod query_string;
pub mod sort;
pub mod store;
pub mod suggest;

// Re-exports: the engine surface consumed by the UI layer
pub use compare::{build_comparison_matrix, POPULAR_FIELDS_TOP};
pub use error::{validate_criteria, DiscoveryError};
pub use filter::{filter_institutions, filter_programs};
pub use query_string::{criteria_from_query_string, criteria_to_query_string};
pub use sort::{sort_institutions, sort_programs};
pub use store::{CatalogSource, InMemoryCatalog};
pub use suggest::{suggest_institutions, MIN_QUERY_LEN, SUGGEST_LIMIT};
