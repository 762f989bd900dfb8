//! Woordpuzzel - CLI
//!
//! Dutch word puzzle with TUI and console modes, automatic simulation and
//! persisted statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Level, debug};
use woordpuzzel::{
    audio::TerminalBell,
    commands::{
        ConsolePresenter, SimulateConfig, run_export, run_import, run_simple, run_simulation,
        run_stats,
    },
    engine::GameEngine,
    output::print_simulation_result,
    storage::SettingsStore,
    wordlists::{EASY, HARD, WordPool, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "woordpuzzel",
    about = "Dutch word puzzle: reveal the hidden words letter by letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words per round
    #[arg(short = 'n', long, global = true, default_value_t = 3,
          value_parser = clap::value_parser!(u16).range(1..=20))]
    words: u16,

    /// Wordlist: 'all' (default, 75 words), 'easy' (50), 'hard' (25), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Settings file holding the sound preference and statistics
    #[arg(long, global = true, default_value = SettingsStore::DEFAULT_PATH)]
    settings: PathBuf,

    /// Do not read or write the settings file
    #[arg(long, global = true)]
    no_save: bool,

    /// Write logs to this file (the TUI otherwise discards them)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Play many automatic rounds and report the outcome
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'c', long, default_value = "1000")]
        count: usize,

        /// Base RNG seed; round i uses seed + i
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Letter strategy: frequency (default) or random
        #[arg(long, default_value = "frequency", value_parser = ["frequency", "random"])]
        strategy: String,

        /// Never use hints
        #[arg(long)]
        no_hints: bool,
    },

    /// Show persisted statistics
    Stats,

    /// Export settings and statistics as JSON
    Export {
        /// Output file (stdout if omitted)
        file: Option<PathBuf>,
    },

    /// Import settings and statistics from an export file
    Import {
        /// Export file to read
        file: PathBuf,
    },
}

/// Load the word pool based on the -w flag
///
/// - "all": easy and hard lists combined
/// - "easy" / "hard": a single embedded list
/// - "<path>": custom wordlist from file, one word per line
fn load_wordlists(wordlist_mode: &str) -> Result<WordPool> {
    use woordpuzzel::wordlists::loader::load_from_file;

    let pool = match wordlist_mode {
        "all" => WordPool::default(),
        "easy" => WordPool::new(words_from_slice(EASY), Vec::new()),
        "hard" => WordPool::new(Vec::new(), words_from_slice(HARD)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("could not load wordlist {path}"))?;
            WordPool::from_words(words)
        }
    };

    if pool.is_empty() {
        anyhow::bail!("wordlist '{wordlist_mode}' contains no valid words");
    }
    Ok(pool)
}

fn init_logging(verbose: u8, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        builder.with_writer(Mutex::new(file)).with_ansi(false).init();
    } else if tui {
        // Anything written to the terminal would corrupt the alternate screen
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let store = if cli.no_save {
        SettingsStore::disabled()
    } else {
        SettingsStore::new(&cli.settings)
    };
    let word_count = usize::from(cli.words);

    match command {
        Commands::Play => {
            let pool = load_wordlists(&cli.wordlist)?;
            run_play_command(pool, store, word_count)
        }
        Commands::Simple => {
            let pool = load_wordlists(&cli.wordlist)?;
            run_simple_command(pool, &store, word_count)
        }
        Commands::Simulate {
            count,
            seed,
            strategy,
            no_hints,
        } => {
            let pool = load_wordlists(&cli.wordlist)?;
            let config = SimulateConfig {
                word_count,
                strategy,
                use_hints: !no_hints,
                ..SimulateConfig::new(count, seed)
            };
            run_simulate_command(&pool, &config);
            Ok(())
        }
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
        Commands::Export { file } => run_export(&store, file.as_deref()),
        Commands::Import { file } => run_import(&store, &file),
    }
}

fn run_simulate_command(pool: &WordPool, config: &SimulateConfig) {
    println!(
        "Simulating {} rounds of {} word(s) with the {} strategy...",
        config.rounds, config.word_count, config.strategy
    );
    let result = run_simulation(pool, config);
    print_simulation_result(&result);
}

fn run_simple_command(pool: WordPool, store: &SettingsStore, word_count: usize) -> Result<()> {
    let settings = store.load();
    debug!(sound = settings.sound_enabled, "settings loaded");

    let mut engine = GameEngine::new(pool, ConsolePresenter::default(), TerminalBell)
        .with_sound_enabled(settings.sound_enabled);
    run_simple(&mut engine, store, word_count).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(pool: WordPool, store: SettingsStore, word_count: usize) -> Result<()> {
    use woordpuzzel::interactive::{App, TuiPresenter, run_tui};

    let settings = store.load();
    debug!(sound = settings.sound_enabled, "settings loaded");

    let engine = GameEngine::new(pool, TuiPresenter::default(), TerminalBell)
        .with_sound_enabled(settings.sound_enabled);
    run_tui(App::new(engine, store, word_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_accepts_known_strategies() {
        for name in ["frequency", "random"] {
            let cli = Cli::try_parse_from(["woordpuzzel", "simulate", "--strategy", name]).unwrap();
            assert!(matches!(
                cli.command,
                Some(Commands::Simulate { ref strategy, .. }) if strategy == name
            ));
        }
    }

    #[test]
    fn simulate_rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["woordpuzzel", "simulate", "--strategy", "entropy"]);
        assert!(result.is_err());
    }

    #[test]
    fn words_limited_to_twenty() {
        assert!(Cli::try_parse_from(["woordpuzzel", "--words", "0"]).is_err());
        assert!(Cli::try_parse_from(["woordpuzzel", "--words", "21"]).is_err());
        let cli = Cli::try_parse_from(["woordpuzzel", "--words", "20"]).unwrap();
        assert_eq!(cli.words, 20);
    }
}
