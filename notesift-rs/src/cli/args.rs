//! CLI argument definitions using clap.

use crate::types::NoteId;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notesift")]
#[command(author, version, about = "Filter and rank a list of notes", long_about = None)]
pub struct Cli {
    /// Notes file to load (overrides config default)
    #[arg(long, global = true)]
    pub notes: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }

    /// Default tracing filter from the flags, falling back to `configured`.
    pub fn log_filter(&self, configured: Option<&str>) -> String {
        match self.verbose {
            0 if self.quiet => "error".to_string(),
            0 => configured.unwrap_or("warn").to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every note
    List(ListArgs),

    /// Search notes, best matches first
    Search(SearchArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Delete a note and show the re-filtered list (the notes file is not modified)
    Delete(DeleteArgs),
}

// === List ===

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Maximum number of notes to print
    #[arg(long)]
    pub limit: Option<usize>,
}

// === Search ===

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query; space-separated terms
    pub query: String,

    /// Maximum number of results to print
    #[arg(long)]
    pub limit: Option<usize>,
}

// === Show ===

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Id of the note
    pub id: NoteId,
}

// === Delete ===

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Id of the note to delete
    pub id: NoteId,

    /// Query to re-apply after deleting
    #[arg(long, default_value = "")]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["notesift", "--notes", "n.json", "search", "apple pie", "--limit", "1"]);
        assert_eq!(cli.notes, Some(PathBuf::from("n.json")));
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "apple pie");
                assert_eq!(args.limit, Some(1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_delete_id() {
        let cli = Cli::parse_from(["notesift", "delete", "2", "--query", "apple"]);
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.id, NoteId(2));
                assert_eq!(args.query, "apple");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format() {
        let cli = Cli::parse_from(["notesift", "--yaml", "list"]);
        assert_eq!(cli.output_format(), OutputFormat::Yaml);
        let cli = Cli::parse_from(["notesift", "list"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_log_filter() {
        let cli = Cli::parse_from(["notesift", "list"]);
        assert_eq!(cli.log_filter(None), "warn");
        assert_eq!(cli.log_filter(Some("info")), "info");

        let cli = Cli::parse_from(["notesift", "-vv", "list"]);
        assert_eq!(cli.log_filter(Some("info")), "debug");

        let cli = Cli::parse_from(["notesift", "-q", "list"]);
        assert_eq!(cli.log_filter(Some("info")), "error");
    }
}
