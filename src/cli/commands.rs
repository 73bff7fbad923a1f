//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(about = "Personal vocabulary journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a word and its meaning
    Add {
        /// The word being learned
        word: String,

        /// Its meaning, in your own words
        meaning: String,

        /// Day to record it on (e.g., today, yesterday, last monday, 2024-01-10)
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// Show saved words grouped by day, newest first
    Show {
        /// Day to show (default: today)
        #[arg(value_name = "DATE", default_value = "today")]
        date: String,

        /// Show every day instead of a single one
        #[arg(short, long)]
        all: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_date() {
        let cli = Cli::try_parse_from([
            "vocab",
            "add",
            "ephemeral",
            "fleeting",
            "--date",
            "2024-01-10",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                word,
                meaning,
                date,
            } => {
                assert_eq!(word, "ephemeral");
                assert_eq!(meaning, "fleeting");
                assert_eq!(date, "2024-01-10");
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_defaults() {
        let cli = Cli::try_parse_from(["vocab", "show"]).unwrap();

        match cli.command {
            Commands::Show { date, all } => {
                assert_eq!(date, "today");
                assert!(!all);
            }
            other => panic!("Expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["vocab"]).is_err());
    }
}
