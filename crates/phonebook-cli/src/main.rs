mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, contacts, import, Book, Context};
use crate::error::{exit_code_for, report_error};
use phonebook_config as config;
use phonebook_core::{Directory, FileSource, PhoneBook, WriterSink};

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "In-memory contact directory")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Import a delimited file before running the command (repeatable)
    #[arg(long = "load", value_name = "FILE", global = true)]
    load: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and store a contact
    Add(contacts::AddArgs),
    /// Find contacts whose fields contain a substring
    Find(contacts::FindArgs),
    /// Remove contacts whose fields contain a substring
    Remove(contacts::RemoveArgs),
    /// Import `name;phone;email` lines from a file
    Import(import::ImportArgs),
    /// Render all contacts as a table
    Table(contacts::TableArgs),
    /// Show the whole book
    Show(contacts::ShowArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        load,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let mut book = open_book(&app_config, json)?;
            for path in load {
                book.import_from(&FileSource::new(&path))
                    .with_context(|| format!("load {}", path.display()))?;
                debug!(path = %path.display(), contacts = book.directory().len(), "preloaded");
            }

            let mut ctx = Context {
                book: &mut book,
                json,
            };

            match command {
                Command::Add(args) => contacts::add(&mut ctx, args),
                Command::Find(args) => contacts::find(&mut ctx, args),
                Command::Remove(args) => contacts::remove(&mut ctx, args),
                Command::Import(args) => import::import_file(&mut ctx, args),
                Command::Table(args) => contacts::table(&mut ctx, args),
                Command::Show(args) => contacts::show(&mut ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before book setup")
                }
            }
        }
    }
}

fn open_book(app_config: &config::AppConfig, json: bool) -> Result<Book> {
    let directory = Directory::with_key_separator(&app_config.key_separator)?;
    // JSON mode keeps stdout for the command result.
    let writer: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let book = PhoneBook::with_directory(directory, WriterSink::new(writer))
        .with_field_separator(&app_config.field_separator)?
        .with_labels(app_config.table.clone());
    Ok(book)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
