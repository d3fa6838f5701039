//! Support library for the panograph CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive the `link` command without spawning a subprocess.

pub mod cli;
pub mod logging;
