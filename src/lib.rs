//! LOFA Settlement Service Library
//!
//! Per-partner revenue and settlement computation for the LOFA Seoul
//! marketplace operation: the aggregation engine, the order record model
//! around it, and a thin HTTP surface for the operations portal.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::revenue;
