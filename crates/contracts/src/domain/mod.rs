pub mod common;

pub mod a001_institution;
pub mod a002_program;
