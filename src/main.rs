//! Words From a Word - CLI
//!
//! Word puzzle with TUI and line-based modes. Progress and settings live in
//! small text files next to where the game is run.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_from_word::{
    catalog::{Catalog, load_catalog, load_catalog_from_dir},
    commands::{
        check_word, reset_progress, run_simple, simple::start_mode_from_answer, summarize_levels,
    },
    engine::{ProgressState, StartMode},
    interactive::{App, run_tui},
    output::{print_check_result, print_levels},
    session::Game,
    storage::{FileProgressStore, ProgressStore, SettingsStore},
};

#[derive(Parser)]
#[command(
    name = "word_from_word",
    about = "Build as many words as you can from the letters of one word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Progress file
    #[arg(long, global = true, default_value = "game_save.txt")]
    save_file: PathBuf,

    /// Settings file
    #[arg(long, global = true, default_value = "game_settings.txt")]
    settings_file: PathBuf,

    /// Directory with level1.txt, level2.txt, ... (default: built-in word lists)
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple {
        /// Start a new game without asking
        #[arg(long, conflicts_with = "continue_game")]
        new: bool,

        /// Continue the saved game without asking
        #[arg(long = "continue")]
        continue_game: bool,
    },

    /// List levels and saved progress
    Levels,

    /// Check whether a word is valid on a level (progress is not touched)
    Check {
        /// Word to check
        word: String,

        /// Level number, starting at 1
        #[arg(short, long, default_value = "1")]
        level: usize,
    },

    /// Delete saved progress
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let is_tui = matches!(command, Commands::Play);
    init_tracing(cli.log_file.as_deref(), is_tui)?;

    let catalog = build_catalog(cli.words_dir.as_deref());
    let store = FileProgressStore::new(&cli.save_file);
    let settings_store = SettingsStore::new(&cli.settings_file);

    match command {
        Commands::Play => run_tui(App::new(&catalog, store, settings_store)),
        Commands::Simple { new, continue_game } => {
            run_simple_command(&catalog, store, &settings_store, new, continue_game)
        }
        Commands::Levels => {
            run_levels_command(&catalog, &store);
            Ok(())
        }
        Commands::Check { word, level } => run_check_command(&catalog, &word, level),
        Commands::Reset => run_reset_command(store),
    }
}

/// Set up logging
///
/// With a log file everything at info and above goes there. Otherwise line-based
/// commands log warnings to stderr and the TUI logs nothing.
fn init_tracing(log_file: Option<&Path>, is_tui: bool) -> Result<()> {
    let filter =
        |default: &str| EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter("word_from_word=info"))
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    } else if is_tui {
        tracing_subscriber::registry().with(filter("off")).init();
    } else {
        tracing_subscriber::registry()
            .with(filter("word_from_word=warn"))
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }

    Ok(())
}

fn build_catalog(words_dir: Option<&Path>) -> Catalog {
    match words_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading word lists from directory");
            load_catalog_from_dir(dir)
        }
        None => load_catalog(),
    }
}

fn run_simple_command(
    catalog: &Catalog,
    store: FileProgressStore,
    settings_store: &SettingsStore,
    new: bool,
    continue_game: bool,
) -> Result<()> {
    let settings = settings_store.load();
    let can_continue = Game::can_continue(&store);

    let mode = if new {
        StartMode::New
    } else if continue_game {
        StartMode::Continue
    } else if can_continue {
        print!("Continue the saved game? [Y/n]: ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        start_mode_from_answer(&answer, can_continue)
    } else {
        StartMode::New
    };

    let (game, reply) = Game::start(catalog, store, mode);
    if let Some(err) = reply.warning {
        eprintln!("Warning: {err}");
    }
    run_simple(game, &settings).map_err(|e| anyhow::anyhow!(e))
}

fn run_levels_command(catalog: &Catalog, store: &FileProgressStore) {
    let progress = match store.load() {
        Ok(state) => state.unwrap_or_default().clamped(catalog.len()),
        Err(err) => {
            tracing::warn!(error = %err, "stored progress unusable");
            ProgressState::new()
        }
    };
    print_levels(&summarize_levels(catalog, &progress));
}

fn run_check_command(catalog: &Catalog, word: &str, level: usize) -> Result<()> {
    let index = level
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Level numbers start at 1"))?;
    let result = check_word(catalog, index, word).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_reset_command(mut store: FileProgressStore) -> Result<()> {
    let had_progress = reset_progress(&mut store)
        .with_context(|| format!("cannot reset {}", store.path().display()))?;
    if had_progress {
        println!("Saved progress deleted.");
    } else {
        println!("No saved progress.");
    }
    Ok(())
}
