//! Proptest tuning read from the environment.
//!
//! CI jobs raise case counts or enable forking without code changes; local
//! runs fall back to the defaults chosen by each suite.

use std::{env, fmt};

/// Overrides the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Runs each property case in a forked subprocess when truthy.
pub const SPANWISE_PBT_FORK_ENV_KEY: &str = "SPANWISE_PBT_FORK";

/// Case count and fork policy for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Builds a profile from the environment, using the supplied defaults for
    /// unset or malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(128, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(SPANWISE_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Rejection {
    NotANumber,
    ZeroCases,
    NotAFlag,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotANumber => "expected a positive integer",
            Self::ZeroCases => "cases must be greater than zero",
            Self::NotAFlag => "expected true/false, 1/0, yes/no or on/off",
        })
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, Rejection>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, Rejection> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(Rejection::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(Rejection::NotANumber),
    }
}

fn parse_flag(raw: &str) -> Result<bool, Rejection> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Rejection::NotAFlag),
    }
}
