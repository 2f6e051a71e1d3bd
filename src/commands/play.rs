//! Interactive play mode
//!
//! Text-based hangman game against the manager.

use super::GameConfig;
use crate::manager::WordSetManager;
use crate::output::formatters::{format_guesses, gallows_bar, pluralize};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Tally of games played in one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
}

/// How a single game ended
enum GameEnd {
    Won,
    Lost,
    Restart,
    Quit,
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a game
/// cannot be set up from the dictionary.
pub fn run_play(dictionary: &[String], config: &GameConfig) -> Result<SessionStats> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play_session(&mut input, &mut output, dictionary, config)
}

/// Play games until the player quits or input runs out
///
/// # Errors
///
/// Returns an error on I/O failure or if a game cannot be set up.
pub fn play_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    dictionary: &[String],
    config: &GameConfig,
) -> Result<SessionStats> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Evil Hangman                              ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess one letter at a time.")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for a new game\n")?;

    let mut stats = SessionStats::default();

    loop {
        let length = config.resolve_length(dictionary)?;
        let mut manager = config.manager(dictionary, length)?;

        if manager.words().is_empty() {
            writeln!(output, "❌ The dictionary has no {length}-letter words.")?;
            return Ok(stats);
        }

        writeln!(
            output,
            "🎲 New game: {} letters, {} wrong {} allowed\n",
            length.to_string().bright_cyan().bold(),
            manager.remaining_guesses(),
            pluralize(manager.remaining_guesses(), "guess", "guesses")
        )?;

        match play_game(input, output, &mut manager, config)? {
            GameEnd::Won => {
                stats.played += 1;
                stats.won += 1;
            }
            GameEnd::Lost => stats.played += 1,
            GameEnd::Restart => continue,
            GameEnd::Quit => break,
        }

        match read_input(input, output, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => {}
            _ => break,
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! You won {} of {} {}.\n",
        stats.won,
        stats.played,
        pluralize(stats.played, "game", "games")
    )?;
    Ok(stats)
}

fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    manager: &mut WordSetManager,
    config: &GameConfig,
) -> Result<GameEnd> {
    loop {
        if manager.is_exhausted() {
            let answer = manager.words().iter().next().cloned().unwrap_or_default();
            writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                output,
                "  {} The word was {}",
                "💀 Out of guesses!".bright_red().bold(),
                answer.bright_yellow().bold()
            )?;
            writeln!(output, "{}\n", "═".repeat(60).bright_cyan())?;
            return Ok(GameEnd::Lost);
        }

        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(output, "Word:    {}", manager.reveal().to_string().bright_white().bold())?;
        writeln!(output, "Guessed: {}", format_guesses(&manager.guesses()))?;
        writeln!(
            output,
            "Misses:  [{}] {} left",
            gallows_bar(manager.remaining_guesses(), config.max_guesses),
            manager.remaining_guesses()
        )?;

        let Some(line) = read_input(input, output, "Your guess")? else {
            return Ok(GameEnd::Quit);
        };
        let line = line.to_lowercase();

        let letter = match line.as_str() {
            "quit" | "exit" => return Ok(GameEnd::Quit),
            "new" => {
                writeln!(output, "\n🔄 New game started!\n")?;
                return Ok(GameEnd::Restart);
            }
            "words" => {
                let count = manager.words().len();
                writeln!(
                    output,
                    "🤫 {count} {} still possible\n",
                    pluralize(count, "word", "words")
                )?;
                continue;
            }
            _ => {
                let mut chars = line.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_alphanumeric() => letter,
                    _ => {
                        writeln!(output, "❌ Enter a single letter\n")?;
                        continue;
                    }
                }
            }
        };

        match manager.record(letter) {
            Ok(0) => writeln!(output, "{}\n", format!("Sorry, there are no {letter}'s").red())?,
            Ok(count) => writeln!(
                output,
                "{}\n",
                format!(
                    "Yes, there {} {count} {letter}",
                    pluralize(count, "is", "are")
                )
                .green()
            )?,
            Err(err) => {
                writeln!(output, "❌ {err}\n")?;
                continue;
            }
        }

        if manager.is_solved() {
            writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                output,
                "  {} The word was {}",
                "🎉 You beat me!".bright_green().bold(),
                manager.reveal().to_string().replace(' ', "").bright_yellow().bold()
            )?;
            writeln!(output, "{}\n", "═".repeat(60).bright_cyan())?;
            return Ok(GameEnd::Won);
        }
    }
}

/// Prompt for a line of input, `None` at end of input
fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
