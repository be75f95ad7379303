//! Run-wide constants and the knobs that override them.
//!
//! The repeat count follows the build profile (`debug_assertions`) unless
//! `FNBENCH_PROFILE` or `FNBENCH_REPEATS` say otherwise.

use core::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Size of every population.
pub const NUM_ENTITIES: usize = 1000;
/// Passes over the population in a debug build.
pub const DEBUG_REPEATS: usize = 10_000;
/// Passes over the population in a release build.
pub const RELEASE_REPEATS: usize = 100_000;
/// Argument of every call.
pub const TICK: f32 = 0.016;

pub const PROFILE_ENV: &str = "FNBENCH_PROFILE";
pub const REPEATS_ENV: &str = "FNBENCH_REPEATS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown profile `{0}`, expected `debug` or `release`")]
    UnknownProfile(String),
    #[error("invalid repeat count `{value}`")]
    InvalidRepeats {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("repeat count must be at least 1")]
    ZeroRepeats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    pub const fn of_build() -> Self {
        if cfg!(debug_assertions) {
            Profile::Debug
        } else {
            Profile::Release
        }
    }

    pub const fn repeats(self) -> usize {
        match self {
            Profile::Debug => DEBUG_REPEATS,
            Profile::Release => RELEASE_REPEATS,
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Profile::Debug),
            "release" => Ok(Profile::Release),
            _ => Err(ConfigError::UnknownProfile(s.to_owned())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub entities: usize,
    pub repeats: usize,
    pub seed: u64,
    pub tick: f32,
}

impl Settings {
    pub const fn new(profile: Profile, seed: u64) -> Self {
        Settings {
            entities: NUM_ENTITIES,
            repeats: profile.repeats(),
            seed,
            tick: TICK,
        }
    }

    /// Reads the overrides from the process environment.
    pub fn from_env(seed: u64) -> Result<Self, ConfigError> {
        Self::from_lookup(seed, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        seed: u64,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let profile = match lookup(PROFILE_ENV) {
            Some(p) => p.parse()?,
            None => Profile::of_build(),
        };
        let mut settings = Settings::new(profile, seed);

        if let Some(value) = lookup(REPEATS_ENV) {
            let parsed = value.trim().parse::<usize>();
            settings.repeats = match parsed {
                Ok(0) => return Err(ConfigError::ZeroRepeats),
                Ok(n) => n,
                Err(source) => return Err(ConfigError::InvalidRepeats { value, source }),
            };
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_the_build() {
        let s = Settings::from_lookup(3, lookup(&[])).unwrap();
        assert_eq!(s.repeats, Profile::of_build().repeats());
        assert_eq!(s.entities, NUM_ENTITIES);
        assert_eq!(s.seed, 3);
        assert_eq!(s.tick, TICK);
    }

    #[test]
    fn profile_override() {
        let s = Settings::from_lookup(1, lookup(&[(PROFILE_ENV, "Release")])).unwrap();
        assert_eq!(s.repeats, RELEASE_REPEATS);
        let s = Settings::from_lookup(1, lookup(&[(PROFILE_ENV, "debug")])).unwrap();
        assert_eq!(s.repeats, DEBUG_REPEATS);
    }

    #[test]
    fn repeats_override_wins_over_profile() {
        let s = Settings::from_lookup(
            1,
            lookup(&[(PROFILE_ENV, "release"), (REPEATS_ENV, " 100 ")]),
        )
        .unwrap();
        assert_eq!(s.repeats, 100);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Settings::from_lookup(1, lookup(&[(PROFILE_ENV, "fast")])),
            Err(ConfigError::UnknownProfile("fast".into()))
        );
        assert_eq!(
            Settings::from_lookup(1, lookup(&[(REPEATS_ENV, "0")])),
            Err(ConfigError::ZeroRepeats)
        );
        assert!(matches!(
            Settings::from_lookup(1, lookup(&[(REPEATS_ENV, "lots")])),
            Err(ConfigError::InvalidRepeats { value, .. }) if value == "lots"
        ));
    }

    #[test]
    fn profile_round_trips_through_display() {
        for p in [Profile::Debug, Profile::Release] {
            assert_eq!(p.to_string().parse::<Profile>(), Ok(p));
        }
    }
}
