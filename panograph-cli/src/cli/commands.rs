//! Argument definitions and execution of the `link` command.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use panograph_core::{NavigationError, NavigationGraph, NavigationGraphBuilder, PanoramaMetadata};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "panograph", about = "Plan navigation links between panoramas.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Link the panoramas listed in a manifest.
    Link(LinkCommand),
}

/// Options accepted by the `link` command.
#[derive(Debug, Args, Clone)]
pub struct LinkCommand {
    /// JSON array of panorama metadata records.
    pub manifest: PathBuf,

    /// Longest candidate link, in decimal degrees.
    #[arg(long = "max-link-distance")]
    pub max_link_distance: Option<f64>,

    /// Fail on panoramas without a location instead of skipping them.
    #[arg(long)]
    pub strict: bool,

    /// Report encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Encodings supported by [`render_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The manifest could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The manifest was not a JSON array of panorama records.
    #[error("failed to parse manifest `{path}`: {source}")]
    Manifest {
        /// Path of the malformed manifest.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Planning failed.
    #[error(transparent)]
    Core(#[from] NavigationError),
}

/// One spanning link as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportedLink {
    /// Panorama the arrow is drawn in.
    pub from: String,
    /// Panorama the arrow leads to.
    pub to: String,
    /// Planar distance between the two panoramas.
    pub weight: f64,
    /// Bearing of the link.
    pub bearing: f64,
    /// Bearing relative to the heading of `from`, when known.
    pub relative_bearing: Option<f64>,
}

/// Outcome of the `link` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkReport {
    /// Report encoding requested on the command line.
    #[serde(skip)]
    pub format: OutputFormat,
    /// Connected groups among the located panoramas.
    pub components: usize,
    /// Spanning links in acceptance order.
    pub links: Vec<ReportedLink>,
    /// Panoramas skipped for lacking a location.
    pub skipped: Vec<String>,
}

impl LinkReport {
    fn from_graph(graph: &NavigationGraph, format: OutputFormat) -> Self {
        let links = graph
            .links()
            .iter()
            .zip(graph.arrows())
            .map(|(link, arrow)| ReportedLink {
                from: arrow.from.to_owned(),
                to: arrow.to.to_owned(),
                weight: link.weight(),
                bearing: arrow.bearing,
                relative_bearing: arrow.relative_bearing,
            })
            .collect();
        Self {
            format,
            components: graph.forest().component_count(),
            links,
            skipped: graph.skipped().to_vec(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the manifest cannot be read or planning fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use panograph_cli::cli::{Cli, Command, LinkCommand, OutputFormat, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"[
///         {"id": "hall", "latitude": [40, 0, 0], "longitude": [74, 0, 0], "heading": 0},
///         {"id": "porch", "latitude": [40, 0, 2], "longitude": [74, 0, 0], "heading": null}
///     ]"#,
/// )?;
/// let cli = Cli {
///     command: Command::Link(LinkCommand {
///         manifest: file.path().to_path_buf(),
///         max_link_distance: None,
///         strict: false,
///         format: OutputFormat::Text,
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.links.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<LinkReport, CliError> {
    match cli.command {
        Command::Link(link) => run_link(&link),
    }
}

#[instrument(name = "cli.link", err, skip_all, fields(manifest = %command.manifest.display()))]
pub(super) fn run_link(command: &LinkCommand) -> Result<LinkReport, CliError> {
    let mut builder = NavigationGraphBuilder::new().with_skip_incomplete(!command.strict);
    if let Some(limit) = command.max_link_distance {
        builder = builder.with_max_link_distance(limit);
    }
    let planner = builder.build()?;

    let panoramas = load_manifest(&command.manifest)?;
    debug!(panoramas = panoramas.len(), "manifest loaded");
    let graph = planner.plan(&panoramas)?;
    Ok(LinkReport::from_graph(&graph, command.format))
}

pub(super) fn load_manifest(path: &Path) -> Result<Vec<PanoramaMetadata>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `report` to `writer` in the format it was requested in.
///
/// Text output starts with `links:` and `components:` header lines, then
/// one `from\tto\tweight\tbearing\trelative` line per link (`-` when no
/// heading is known) and one `skipped:` line per skipped panorama.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use panograph_cli::cli::{LinkReport, OutputFormat, ReportedLink, render_report};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = LinkReport {
///     format: OutputFormat::Text,
///     components: 1,
///     links: vec![ReportedLink {
///         from: "hall".into(),
///         to: "porch".into(),
///         weight: 0.5,
///         bearing: 90.0,
///         relative_bearing: None,
///     }],
///     skipped: Vec::new(),
/// };
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("hall\tporch\t0.5\t90\t-"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &LinkReport, mut writer: impl Write) -> io::Result<()> {
    match report.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)
        }
        OutputFormat::Text => render_text(report, writer),
    }
}

fn render_text(report: &LinkReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "links: {}", report.links.len())?;
    writeln!(writer, "components: {}", report.components)?;
    for link in &report.links {
        write!(
            writer,
            "{}\t{}\t{}\t{}\t",
            link.from, link.to, link.weight, link.bearing
        )?;
        match link.relative_bearing {
            Some(relative) => writeln!(writer, "{relative}")?,
            None => writeln!(writer, "-")?,
        }
    }
    for id in &report.skipped {
        writeln!(writer, "skipped: {id}")?;
    }
    Ok(())
}
