//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::PlayConfig;

#[derive(Debug, Parser)]
#[command(name = "spoticards", version, about = "Play the music timeline card game")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play the timeline game with a saved playlist
    Play(PlayArgs),
    /// List available playlists
    List(DataArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Data directory (overrides SPOTICARDS_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Playlist folder name to play with
    #[arg(long)]
    pub folder: Option<String>,

    /// List available playlists and exit
    #[arg(long)]
    pub list: bool,

    /// Correctly placed cards needed to win
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub target: Option<u32>,

    /// Fixed shuffle seed
    #[arg(long)]
    pub seed: Option<u32>,

    #[command(flatten)]
    pub data: DataArgs,
}

impl DataArgs {
    pub fn apply(&self, config: &mut PlayConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
    }
}

impl PlayArgs {
    /// Override `config` with the flags that were given.
    pub fn apply(&self, config: &mut PlayConfig) {
        self.data.apply(config);
        if let Some(target) = self.target {
            config.target_cards = target;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "spoticards",
            "play",
            "--folder",
            "eighties",
            "--target",
            "3",
            "--seed",
            "7",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.folder.as_deref(), Some("eighties"));

        let mut config = PlayConfig::default();
        args.apply(&mut config);
        assert_eq!(config.target_cards, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_zero_target_rejected() {
        assert!(Cli::try_parse_from(["spoticards", "play", "--target", "0"]).is_err());
    }

    #[test]
    fn test_list_with_data_dir() {
        let cli = Cli::try_parse_from(["spoticards", "list", "--data-dir", "/srv/cards"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        let mut config = PlayConfig::default();
        args.apply(&mut config);
        assert_eq!(config.data_dir, PathBuf::from("/srv/cards"));
    }
}
