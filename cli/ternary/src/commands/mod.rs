//! CLI command implementations.

pub mod batch;
pub mod eval;
pub mod init;
pub mod rules;
pub mod stats;
pub mod truth_table;
