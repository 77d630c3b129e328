use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmgpt",
    version,
    about = "Weather, soil and crop advice for farmers, in English and Hindi"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and test the backend connection
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_subcommand() {
        let cli = Cli::parse_from(["farmgpt", "-vv", "--data-dir", "/tmp/farm", "check"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/farm")));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn no_subcommand_runs_the_tui() {
        let cli = Cli::parse_from(["farmgpt"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
}
