//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_rewind_core::{MoveOrder, Position};

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with a navigable, branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Initial move-list order (overrides the config file)
        #[arg(long)]
        sort: Option<MoveOrder>,
    },

    /// Apply a move sequence and print the resulting state
    Replay {
        /// Cells to play, comma separated: indices (0-8) or labels like "top-left"
        #[arg(short, long, value_delimiter = ',', value_parser = parse_cell)]
        moves: Vec<usize>,

        /// Move number to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Move-list order (overrides the config file)
        #[arg(long)]
        sort: Option<MoveOrder>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The full projection as JSON
    Json,
}

/// Parses one `--moves` entry into a cell index.
///
/// Numbers pass through as-is so out-of-range cells reach the replay and get
/// logged there.
fn parse_cell(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("Unknown cell: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from([
            "strictly_rewind",
            "replay",
            "--moves",
            "0,4,1",
            "--jump",
            "1",
            "--sort",
            "desc",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Replay {
                moves,
                jump,
                sort,
                format,
            } => {
                assert_eq!(moves, vec![0, 4, 1]);
                assert_eq!(jump, Some(1));
                assert_eq!(sort, Some(MoveOrder::Descending));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_moves_accept_labels() {
        let cli = Cli::parse_from([
            "strictly_rewind",
            "replay",
            "--moves",
            "center,Top-left,8,12",
        ]);
        match cli.command {
            Command::Replay { moves, .. } => assert_eq!(moves, vec![4, 0, 8, 12]),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_moves_reject_unknown_label() {
        let result = Cli::try_parse_from(["strictly_rewind", "replay", "--moves", "0,nowhere"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::parse_from(["strictly_rewind", "play"]);
        assert_eq!(cli.config, PathBuf::from("strictly_rewind.toml"));
        assert!(matches!(cli.command, Command::Play { sort: None }));
    }
}
