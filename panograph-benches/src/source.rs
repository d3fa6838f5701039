//! Synthetic panorama surveys for benchmarking.
//!
//! Panoramas are laid out on a jittered square grid measured in arc seconds
//! around a fixed origin, with random headings. Generation is seeded so runs
//! are comparable.

use panograph_core::{Dms, PanoramaMetadata, bearing, distance};
use rand::{Rng, SeedableRng, rngs::SmallRng};

const ORIGIN_LATITUDE: (f64, f64) = (40.0, 44.0);
const ORIGIN_LONGITUDE: (f64, f64) = (73.0, 59.0);
/// Grid pitch in arc seconds.
const SPACING_SECONDS: f64 = 0.5;

/// Errors that may occur during survey generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested panorama count was zero.
    #[error("panorama count must be greater than zero")]
    ZeroPanoramas,
}

/// Configuration for synthetic survey generation.
#[derive(Clone, Debug)]
pub struct SurveyConfig {
    /// Number of panoramas to generate.
    pub panorama_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Candidate links in the parallel-array shape `compute_mst` consumes.
#[derive(Clone, Debug, Default)]
pub struct CandidateArrays {
    /// Source panorama ids.
    pub from: Vec<String>,
    /// Target panorama ids.
    pub to: Vec<String>,
    /// Planar distances.
    pub weights: Vec<f64>,
    /// Link bearings.
    pub bearings: Vec<f64>,
}

impl CandidateArrays {
    /// Number of candidate links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` when there are no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// A seeded set of located panoramas.
///
/// # Examples
///
/// ```
/// use panograph_benches::source::{SurveyConfig, SyntheticSurvey};
///
/// let survey = SyntheticSurvey::generate(&SurveyConfig { panorama_count: 9, seed: 7 })
///     .expect("valid config");
/// assert_eq!(survey.panoramas().len(), 9);
/// assert_eq!(survey.candidates(None).len(), 36);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticSurvey {
    panoramas: Vec<PanoramaMetadata>,
}

impl SyntheticSurvey {
    /// Generates the survey eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroPanoramas`] if `panorama_count` is zero.
    pub fn generate(config: &SurveyConfig) -> Result<Self, SyntheticError> {
        if config.panorama_count == 0 {
            return Err(SyntheticError::ZeroPanoramas);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let side = grid_side(config.panorama_count);
        let panoramas = (0..config.panorama_count)
            .map(|index| {
                let row = index / side;
                let col = index % side;
                let north = row as f64 * SPACING_SECONDS + rng.gen_range(-0.1..0.1);
                let west = col as f64 * SPACING_SECONDS + rng.gen_range(-0.1..0.1);
                PanoramaMetadata::new(format!("pano-{index:05}"))
                    .with_location(
                        Dms::new(ORIGIN_LATITUDE.0, ORIGIN_LATITUDE.1, north),
                        Dms::new(ORIGIN_LONGITUDE.0, ORIGIN_LONGITUDE.1, west),
                    )
                    .with_heading(rng.gen_range(0..360))
            })
            .collect();
        Ok(Self { panoramas })
    }

    /// Returns the generated panoramas in id order.
    #[must_use]
    pub fn panoramas(&self) -> &[PanoramaMetadata] {
        &self.panoramas
    }

    /// Harvests every pair within `max_link_distance` the way the planner
    /// does, so the Kruskal driver can be measured on its own.
    #[must_use]
    pub fn candidates(&self, max_link_distance: Option<f64>) -> CandidateArrays {
        let located: Vec<_> = self
            .panoramas
            .iter()
            .filter_map(|panorama| Some((panorama.id.as_str(), panorama.location()?)))
            .collect();
        let mut out = CandidateArrays::default();
        for (index, &(from_id, from)) in located.iter().enumerate() {
            for &(to_id, to) in located.iter().skip(index + 1) {
                let weight = distance(from.to_planar(), to.to_planar());
                if max_link_distance.is_some_and(|limit| weight > limit) {
                    continue;
                }
                out.from.push(from_id.to_owned());
                out.to.push(to_id.to_owned());
                out.weights.push(weight);
                out.bearings.push(bearing(from, to));
            }
        }
        out
    }
}

fn grid_side(count: usize) -> usize {
    let mut side = 1;
    while side * side < count {
        side += 1;
    }
    side
}
