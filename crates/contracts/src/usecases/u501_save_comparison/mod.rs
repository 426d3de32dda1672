pub mod request;

pub use request::{SaveComparisonRequest, MIN_COMPARED_INSTITUTIONS};
