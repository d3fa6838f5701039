//! Navigation graph planning over panorama metadata.
//!
//! Located panoramas are paired into candidate links weighted by planar
//! distance over `(longitude, latitude)` and oriented with [`bearing`]. The
//! spanning tree over those candidates becomes the navigation graph.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, instrument, warn};

use crate::error::{NavigationError, Result};
use crate::geometry::{GeoCoordinate, bearing, distance, wrap_degrees};
use crate::graph::Edge;
use crate::mst::{MinimumSpanningForest, compute_mst};
use crate::panorama::PanoramaMetadata;

const MAX_HEADING: u16 = 359;

/// Configures and constructs [`NavigationPlanner`] instances.
///
/// # Examples
/// ```
/// use panograph_core::NavigationGraphBuilder;
///
/// let planner = NavigationGraphBuilder::new()
///     .with_max_link_distance(0.01)
///     .with_skip_incomplete(false)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(planner.max_link_distance(), Some(0.01));
/// assert!(!planner.skip_incomplete());
/// ```
#[derive(Debug, Clone)]
pub struct NavigationGraphBuilder {
    max_link_distance: Option<f64>,
    skip_incomplete: bool,
}

impl Default for NavigationGraphBuilder {
    fn default() -> Self {
        Self {
            max_link_distance: None,
            skip_incomplete: true,
        }
    }
}

impl NavigationGraphBuilder {
    /// Creates a builder that links every located pair and skips panoramas
    /// without a location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits candidate links to pairs at most `distance` apart, in decimal
    /// degrees.
    #[must_use]
    pub const fn with_max_link_distance(mut self, distance: f64) -> Self {
        self.max_link_distance = Some(distance);
        self
    }

    /// Returns the configured link distance limit.
    #[must_use]
    pub const fn max_link_distance(&self) -> Option<f64> {
        self.max_link_distance
    }

    /// Chooses whether panoramas lacking a location are skipped (`true`) or
    /// rejected (`false`).
    #[must_use]
    pub const fn with_skip_incomplete(mut self, skip: bool) -> Self {
        self.skip_incomplete = skip;
        self
    }

    /// Returns whether panoramas lacking a location are skipped.
    #[must_use]
    pub const fn skip_incomplete(&self) -> bool {
        self.skip_incomplete
    }

    /// Validates the configuration and constructs a [`NavigationPlanner`].
    ///
    /// # Errors
    /// Returns [`NavigationError::InvalidLinkDistance`] when the link
    /// distance is not finite or not positive.
    pub fn build(self) -> Result<NavigationPlanner> {
        if let Some(limit) = self.max_link_distance
            && !(limit.is_finite() && limit > 0.0)
        {
            return Err(NavigationError::InvalidLinkDistance { got: limit });
        }
        Ok(NavigationPlanner {
            max_link_distance: self.max_link_distance,
            skip_incomplete: self.skip_incomplete,
        })
    }
}

/// Plans navigation graphs from panorama metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPlanner {
    max_link_distance: Option<f64>,
    skip_incomplete: bool,
}

impl NavigationPlanner {
    /// Returns the link distance limit.
    #[must_use]
    pub const fn max_link_distance(&self) -> Option<f64> {
        self.max_link_distance
    }

    /// Returns whether panoramas lacking a location are skipped.
    #[must_use]
    pub const fn skip_incomplete(&self) -> bool {
        self.skip_incomplete
    }

    /// Builds candidate links between located panoramas and keeps their
    /// minimum spanning forest.
    ///
    /// Candidate pairs follow input order: for `i < j` the link runs from
    /// panorama `i` to panorama `j`, and its bearing is measured that way.
    ///
    /// # Examples
    /// ```
    /// use panograph_core::{Dms, NavigationGraphBuilder, PanoramaMetadata};
    ///
    /// let panoramas = [
    ///     PanoramaMetadata::new("hall").with_location(Dms::new(40.0, 0.0, 0.0), Dms::new(74.0, 0.0, 0.0)),
    ///     PanoramaMetadata::new("porch").with_location(Dms::new(40.0, 0.0, 1.0), Dms::new(74.0, 0.0, 0.0)),
    ///     PanoramaMetadata::new("attic"),
    /// ];
    /// let planner = NavigationGraphBuilder::new().build()?;
    /// let graph = planner.plan(&panoramas)?;
    /// assert_eq!(graph.links().len(), 1);
    /// assert_eq!(graph.skipped(), ["attic"]);
    /// # Ok::<(), panograph_core::NavigationError>(())
    /// ```
    ///
    /// # Errors
    /// - [`NavigationError::InvalidHeading`] when a heading exceeds 359.
    /// - [`NavigationError::MissingLocation`] when a panorama lacks a
    ///   location and incomplete panoramas are not skipped.
    /// - [`NavigationError::Mst`] when the spanning tree computation fails.
    #[instrument(
        name = "navigation.plan",
        err,
        skip_all,
        fields(
            panoramas = panoramas.len(),
            max_link_distance = ?self.max_link_distance,
            skip_incomplete = self.skip_incomplete,
        ),
    )]
    pub fn plan(&self, panoramas: &[PanoramaMetadata]) -> Result<NavigationGraph> {
        let mut located: Vec<(&str, GeoCoordinate)> = Vec::with_capacity(panoramas.len());
        let mut skipped = Vec::new();
        let mut headings = HashMap::new();
        let mut seen: HashSet<&str> = HashSet::with_capacity(panoramas.len());

        for panorama in panoramas {
            if let Some(heading) = panorama.heading
                && heading > MAX_HEADING
            {
                return Err(NavigationError::InvalidHeading {
                    id: panorama.id.clone(),
                    heading,
                });
            }
            if !seen.insert(panorama.id.as_str()) {
                warn!(id = %panorama.id, "duplicate panorama id, keeping the first heading");
            }
            if let Some(heading) = panorama.heading {
                headings.entry(panorama.id.clone()).or_insert(heading);
            }

            match panorama.location() {
                Some(location) => located.push((panorama.id.as_str(), location)),
                None if self.skip_incomplete => {
                    warn!(id = %panorama.id, "panorama has no location, skipping");
                    skipped.push(panorama.id.clone());
                }
                None => {
                    return Err(NavigationError::MissingLocation {
                        id: panorama.id.clone(),
                    });
                }
            }
        }

        // Repeated ids share one graph node.
        let node_count = located
            .iter()
            .map(|&(id, _)| id)
            .collect::<HashSet<_>>()
            .len();
        let candidates = self.harvest_candidates(&located);
        debug!(
            located = located.len(),
            nodes = node_count,
            candidates = candidates.weights.len(),
            "candidate links harvested"
        );

        let forest = compute_mst(
            node_count,
            candidates.weights.len(),
            &candidates.from,
            &candidates.to,
            &candidates.weights,
            &candidates.bearings,
        )?;

        info!(
            links = forest.edges().len(),
            skipped = skipped.len(),
            "navigation graph planned"
        );
        Ok(NavigationGraph {
            forest,
            headings,
            skipped,
        })
    }

    fn harvest_candidates(&self, located: &[(&str, GeoCoordinate)]) -> CandidateArrays {
        let mut candidates = CandidateArrays::default();
        for (index, &(from_id, from)) in located.iter().enumerate() {
            for &(to_id, to) in located.iter().skip(index + 1) {
                let weight = distance(from.to_planar(), to.to_planar());
                if self.max_link_distance.is_some_and(|limit| weight > limit) {
                    continue;
                }
                candidates.from.push(from_id.to_owned());
                candidates.to.push(to_id.to_owned());
                candidates.weights.push(weight);
                candidates.bearings.push(bearing(from, to));
            }
        }
        candidates
    }
}

#[derive(Default)]
struct CandidateArrays {
    from: Vec<String>,
    to: Vec<String>,
    weights: Vec<f64>,
    bearings: Vec<f64>,
}

/// Spanning links between panoramas plus the headings needed to orient
/// arrows inside each panorama.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationGraph {
    forest: MinimumSpanningForest<String>,
    headings: HashMap<String, u16>,
    skipped: Vec<String>,
}

impl NavigationGraph {
    /// Returns the spanning links in acceptance order.
    #[must_use]
    pub fn links(&self) -> &[Edge<String>] {
        self.forest.edges()
    }

    /// Returns the underlying spanning forest.
    #[must_use]
    pub const fn forest(&self) -> &MinimumSpanningForest<String> {
        &self.forest
    }

    /// Returns the ids of panoramas skipped for lacking a location.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Returns the heading recorded for `id`.
    #[must_use]
    pub fn heading_of(&self, id: &str) -> Option<u16> {
        self.headings.get(id).copied()
    }

    /// Yields one arrow per link, oriented from `v1` toward `v2`.
    pub fn arrows(&self) -> impl Iterator<Item = NavigationArrow<'_>> {
        self.links().iter().map(|link| {
            let relative_bearing = self
                .heading_of(link.v1())
                .map(|heading| wrap_degrees(link.bearing() - f64::from(heading)));
            NavigationArrow {
                from: link.v1(),
                to: link.v2(),
                bearing: link.bearing(),
                relative_bearing,
            }
        })
    }
}

/// A directional indicator drawn inside the `from` panorama.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationArrow<'a> {
    /// Panorama the arrow is drawn in.
    pub from: &'a str,
    /// Panorama the arrow leads to.
    pub to: &'a str,
    /// Link bearing as computed for the candidate pair.
    pub bearing: f64,
    /// Bearing relative to the heading of `from`, in `[0, 360)`, when that
    /// heading is known.
    pub relative_bearing: Option<f64>,
}
