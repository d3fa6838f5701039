//! Property-test run profile parsed from the environment.
//!
//! CI raises case counts and enables forking through environment variables;
//! local runs fall back to the defaults each suite passes in.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const PANOGRAPH_PBT_FORK_ENV_KEY: &str = "PANOGRAPH_PBT_FORK";

/// Case count and fork policy for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to the supplied defaults when a
    /// variable is unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use panograph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: env_override(PANOGRAPH_PBT_FORK_ENV_KEY, parse_flag).unwrap_or(default_fork),
        }
    }

    /// Number of cases per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn env_override<T>(key: &'static str, parse: fn(&str) -> Result<T, String>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(&raw)
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring malformed property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("unrecognised flag `{other}`")),
    }
}
