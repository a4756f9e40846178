//! Runtime configuration for the headless runner (not gameplay tuning).
//!
//! Every value comes from an environment variable and falls back to a
//! default when unset or unparsable.

use std::{env, path::PathBuf, str::FromStr};

/// Settings for one headless run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: u64,
    pub frames: u32,
    pub window_width: f32,
    pub window_height: f32,
    /// JSON file with [`Tuning`](crate::Tuning) overrides
    pub tuning_path: Option<PathBuf>,
    /// JSON file with [`Settings`](crate::Settings)
    pub settings_path: Option<PathBuf>,
    /// Best-score file; in-memory when unset
    pub score_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frames: 3600,
            window_width: 448.0,
            window_height: 800.0,
            tuning_path: None,
            settings_path: None,
            score_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: parse_or(env::var("FLAP_SEED").ok(), defaults.seed),
            frames: parse_or(env::var("FLAP_FRAMES").ok(), defaults.frames),
            window_width: parse_or(env::var("FLAP_WIDTH").ok(), defaults.window_width),
            window_height: parse_or(env::var("FLAP_HEIGHT").ok(), defaults.window_height),
            tuning_path: env::var_os("FLAP_TUNING").map(PathBuf::from),
            settings_path: env::var_os("FLAP_SETTINGS").map(PathBuf::from),
            score_path: env::var_os("FLAP_SCORE_FILE").map(PathBuf::from),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or(Some(" 42 ".to_string()), 1u64), 42);
        assert_eq!(parse_or(Some("abc".to_string()), 1u64), 1);
        assert_eq!(parse_or::<f32>(None, 448.0), 448.0);
    }
}
