//! Evil Hangman - CLI
//!
//! Play hangman against a keeper that never commits to a word, or inspect
//! how it partitions its candidates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{
        GameConfig, analyze_letter, apply_prefix, replay_letters, run_benchmark, run_play,
    },
    manager::AdmissionRule,
    output::{print_analysis_result, print_benchmark_result, print_replay_result},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against a keeper that never commits to a secret word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word length (random when omitted for play and benchmark)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Number of wrong guesses allowed
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_GUESSES)]
    guesses: usize,

    /// Admission rule
    #[arg(short, long, global = true, value_enum, default_value_t = AdmissionRule::TextualLength)]
    rule: AdmissionRule,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Record a fixed sequence of letters and show each step
    Replay {
        /// Letters to guess, in order
        letters: String,

        /// Show candidate counts for each step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a letter would split the candidates
    Analyze {
        /// Letter to analyze
        letter: char,

        /// Letters to record first
        #[arg(short, long, default_value = "")]
        after: String,
    },

    /// Play many games with random letter orders
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("loading dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dictionary)?;
    let config = GameConfig::new(cli.length, cli.guesses, cli.rule);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&dictionary, &config).map(|_| ()),
        Commands::Replay { letters, verbose } => {
            run_replay_command(&dictionary, &config, &letters, verbose)
        }
        Commands::Analyze { letter, after } => {
            run_analyze_command(&dictionary, &config, letter, &after)
        }
        Commands::Benchmark { count } => run_benchmark_command(&dictionary, &config, count),
    }
}

fn run_replay_command(
    dictionary: &[String],
    config: &GameConfig,
    letters: &str,
    verbose: bool,
) -> Result<()> {
    let length = config.require_length()?;
    let manager = config.manager(dictionary, length)?;

    let result = replay_letters(manager, letters);
    print_replay_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(
    dictionary: &[String],
    config: &GameConfig,
    letter: char,
    after: &str,
) -> Result<()> {
    let length = config.require_length()?;
    let mut manager = config.manager(dictionary, length)?;

    apply_prefix(&mut manager, after).context("recording letters before analysis")?;
    let result = analyze_letter(&manager, letter.to_ascii_lowercase())
        .with_context(|| format!("analyzing '{letter}'"))?;

    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(dictionary: &[String], config: &GameConfig, count: usize) -> Result<()> {
    let length = config.resolve_length(dictionary)?;

    println!(
        "Running benchmark on {count} games of {length}-letter words ({} rule)...",
        config.rule.name()
    );

    let result = run_benchmark(dictionary, length, config, count)?;
    print_benchmark_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_flag_parses_names() {
        let cli = Cli::try_parse_from(["evil_hangman", "--rule", "slots", "play"]).unwrap();
        assert_eq!(cli.rule, AdmissionRule::SlotCount);

        let cli = Cli::try_parse_from(["evil_hangman"]).unwrap();
        assert_eq!(cli.rule, AdmissionRule::TextualLength);
    }

    #[test]
    fn rule_flag_rejects_misspelling() {
        assert!(Cli::try_parse_from(["evil_hangman", "--rule", "slot"]).is_err());
    }
}
