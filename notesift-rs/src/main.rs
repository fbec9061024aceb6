//! notesift CLI entry point.

use clap::Parser;
use notesift::cli::args::{Cli, Commands};
use notesift::cli::output::Output;
use notesift::cli::{delete, list, search, show};
use notesift::config::Config;
use notesift::error::{exit_code, NoteError};
use notesift::store::InMemoryNoteStore;
use notesift::view::NoteList;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(cli: &Cli, config: &Config) {
    // RUST_LOG wins over flags and config.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter(config.log_level.as_deref())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), NoteError> {
    // Load config
    let config = Config::load()?;
    init_logging(cli, &config);

    // Resolve and load the notes file
    let notes_path = config.resolve_notes_path(cli.notes.as_deref())?;
    let store = InMemoryNoteStore::load(&notes_path)?;
    debug!(path = %notes_path.display(), notes = store.len(), "notes loaded");

    // Create output helper
    let output = Output::new(cli.output_format(), cli.quiet);

    // Dispatch command
    match &cli.command {
        Commands::List(args) => {
            list::run(&mut NoteList::new(store), args, &output)?;
        }
        Commands::Search(args) => {
            search::run(&mut NoteList::new(store), args, &output)?;
        }
        Commands::Show(args) => {
            show::run(&store, args, &output)?;
        }
        Commands::Delete(args) => {
            delete::run(&mut NoteList::new(store), args, &output)?;
        }
    }

    Ok(())
}
