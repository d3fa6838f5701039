//! Benchmark setup error type.

use panograph_core::{MstError, NavigationError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic survey generation failed.
    #[error("synthetic survey generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Planner configuration or planning failed.
    #[error("navigation planning failed: {0}")]
    Navigation(#[from] NavigationError),
}
