//! Data contracts shared by the catalog discovery engine and its consumers.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
