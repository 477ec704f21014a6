//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SPOTICARDS_DATA_DIR` | `data` | Root holding `playlists/<folder>/` |
//! | `SPOTICARDS_TARGET_CARDS` | 10 | Correct placements needed to win |
//! | `SPOTICARDS_SEED` | random | Fixed shuffle seed |
//! | `SPOTICARDS_LOG_PATH` | unset | Append logs to this file |
//!
//! Command-line flags override these (see [`crate::cli`]).

use std::env;
use std::path::PathBuf;

use crate::storage::CARDS_DIR_NAME;
use crate::types::DEFAULT_TARGET_CARDS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub data_dir: PathBuf,
    pub target_cards: u32,
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            target_cards: DEFAULT_TARGET_CARDS,
            seed: None,
            log_path: None,
        }
    }
}

impl PlayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable or zero values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let data_dir = non_empty("SPOTICARDS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        let target_cards = non_empty("SPOTICARDS_TARGET_CARDS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_TARGET_CARDS);

        let seed = non_empty("SPOTICARDS_SEED").and_then(|s| s.parse().ok());

        let log_path = non_empty("SPOTICARDS_LOG_PATH").map(PathBuf::from);

        Self {
            data_dir,
            target_cards,
            seed,
            log_path,
        }
    }

    pub fn playlists_dir(&self) -> PathBuf {
        self.data_dir.join("playlists")
    }

    pub fn playlist_dir(&self, folder: &str) -> PathBuf {
        self.playlists_dir().join(folder)
    }

    pub fn cards_dir(&self, folder: &str) -> PathBuf {
        self.playlist_dir(folder).join(CARDS_DIR_NAME)
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
