//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump around in
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to TOML config (defaults are used if the file is missing)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,
    },

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Comma-separated cell indices (0-8, row-major), e.g. 0,4,1
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,

        /// Show the board as of this move instead of the last one
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Resolves the subcommand, falling back to `play` with defaults.
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            config: PathBuf::from("rewind.toml"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                config: PathBuf::from("rewind.toml")
            }
        );
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["rewind", "replay", "0,4,1", "--jump", "2", "--json"])
            .unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec![0, 4, 1],
                jump: Some(2),
                json: true,
            }
        );
    }

    #[test]
    fn test_replay_rejects_non_numeric_moves() {
        assert!(Cli::try_parse_from(["rewind", "replay", "0,x"]).is_err());
    }
}
