//! CLI infrastructure for the oxo engine
//!
//! The binary front-end: an interactive terminal game against the engine
//! and an analysis view of the evaluated tree.

pub mod commands;
pub mod output;
