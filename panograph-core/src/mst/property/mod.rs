//! Property-based tests for the Kruskal driver.
//!
//! Checks the driver against a Prim oracle, validates structural invariants
//! of the produced forest (acyclicity, size bound, metadata pass-through,
//! idempotent root queries) and determinism on distinct weights across
//! several graph topologies.

mod oracle;
mod strategies;
mod structural;
mod types;
