//! Benchmark parameter types.

use std::fmt;

/// Parameters for an MST or planning benchmark run.
#[derive(Clone, Debug)]
pub struct SurveyBenchParams {
    /// Number of panoramas in the survey.
    pub panorama_count: usize,
    /// Candidate link limit in decimal degrees, if any.
    pub max_link_distance: Option<f64>,
}

impl fmt::Display for SurveyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_link_distance {
            Some(limit) => write!(f, "n={},limit={limit}", self.panorama_count),
            None => write!(f, "n={}", self.panorama_count),
        }
    }
}
