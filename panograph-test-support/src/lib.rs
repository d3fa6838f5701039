//! Shared test utilities used across panograph crates.

pub mod ci;
pub mod tracing;
