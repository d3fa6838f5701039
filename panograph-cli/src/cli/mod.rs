//! Command-line interface orchestration for panograph.
//!
//! The `link` command reads a JSON manifest of panorama metadata, plans the
//! navigation graph and reports the spanning links.

mod commands;

pub use commands::{
    Cli, CliError, Command, LinkCommand, LinkReport, OutputFormat, ReportedLink, render_report,
    run_cli,
};
