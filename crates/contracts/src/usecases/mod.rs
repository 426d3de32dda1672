pub mod common;

pub mod u501_save_comparison;
