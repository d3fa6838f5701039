//! Benchmark support crate for panograph.
//!
//! Provides synthetic panorama surveys and parameter types used by the
//! Criterion benchmarks for the Kruskal driver and the navigation planner.

pub mod error;
pub mod params;
pub mod source;
