//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::engine::{Outcome, StartMode};
use crate::output::formatters::{progress_bar, spaced_letters};
use crate::session::{Game, Reply};
use crate::storage::{ProgressStore, Settings};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<S: ProgressStore>(
    game: Game<'_, S>,
    settings: &Settings,
) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, settings, stdin.lock(), stdout.lock()).map(|_| ())
}

/// Drive a game from line input; returns the game when input ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<'a, S, R, W>(
    mut game: Game<'a, S>,
    settings: &Settings,
    mut input: R,
    mut out: W,
) -> Result<Game<'a, S>, String>
where
    S: ProgressStore,
    R: BufRead,
    W: Write,
{
    let io_err = |e: io::Error| e.to_string();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗").map_err(io_err)?;
    writeln!(out, "║                 Words From a Word - Text Mode                ║").map_err(io_err)?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n").map_err(io_err)?;
    writeln!(out, "Build words from the letters of the source word.").map_err(io_err)?;
    writeln!(out, "Commands: 'next', 'prev', 'words', 'help', 'quit'\n").map_err(io_err)?;

    print_level(&game, &mut out).map_err(io_err)?;

    let mut line = String::new();
    loop {
        write!(out, "Word: ").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        line.clear();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "h" | "?" => print_help(&mut out).map_err(io_err)?,
            "words" | "w" => print_level(&game, &mut out).map_err(io_err)?,
            "next" | "n" => {
                let reply = game.go_to_next_level();
                print_reply(&reply, &mut out).map_err(io_err)?;
                if reply.outcome == Outcome::GameCompleted {
                    print_victory(&mut out).map_err(io_err)?;
                    break;
                }
                if matches!(reply.outcome, Outcome::Advanced(_)) {
                    print_level(&game, &mut out).map_err(io_err)?;
                }
            }
            "prev" | "p" => {
                let reply = game.go_to_previous_level();
                print_reply(&reply, &mut out).map_err(io_err)?;
                if matches!(reply.outcome, Outcome::Retreated(_)) {
                    print_level(&game, &mut out).map_err(io_err)?;
                }
            }
            _ => {
                let reply = game.submit_word(&line);
                if matches!(reply.outcome, Outcome::Accepted(_)) && settings.sounds_enabled {
                    write!(out, "\x07").map_err(io_err)?;
                }
                print_reply(&reply, &mut out).map_err(io_err)?;
                if let Outcome::Accepted(count) = reply.outcome {
                    let required = game.level().required();
                    writeln!(out, "   [{}] {count}/{required}", progress_bar(count, required, 20))
                        .map_err(io_err)?;
                }
            }
        }
    }

    if let Err(err) = game.save() {
        writeln!(out, "{} {err}", "⚠ Progress not saved:".yellow()).map_err(io_err)?;
    }
    writeln!(out, "\n👋 Thanks for playing!\n").map_err(io_err)?;
    Ok(game)
}

fn print_level<S: ProgressStore, W: Write>(game: &Game<'_, S>, out: &mut W) -> io::Result<()> {
    let level = game.level();
    let guessed = game.guessed();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} ({}/{})",
        level.name().bright_cyan().bold(),
        game.level_index() + 1,
        game.catalog().len()
    )?;
    writeln!(out, "Source word: {}", spaced_letters(level.letters().letters()).bright_yellow().bold())?;
    writeln!(out, "Guessed {} of {}:", guessed.len(), level.required())?;
    for word in guessed {
        writeln!(out, "  • {}", word.to_uppercase())?;
    }
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    Ok(())
}

fn print_reply<W: Write>(reply: &Reply, out: &mut W) -> io::Result<()> {
    let text = reply.outcome.to_string();
    match reply.outcome {
        Outcome::NoOp => {}
        Outcome::Accepted(_) | Outcome::Advanced(_) | Outcome::GameCompleted => {
            writeln!(out, "✓ {}", text.green())?;
        }
        Outcome::AlreadyGuessed | Outcome::Retreated(_) => writeln!(out, "• {text}")?,
        Outcome::InvalidLetters | Outcome::NotInDictionary | Outcome::InsufficientWords(_) => {
            writeln!(out, "❌ {}", text.red())?;
        }
    }
    if let Some(err) = &reply.warning {
        writeln!(out, "{} {err}", "⚠ Progress not saved:".yellow())?;
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nRules:")?;
    writeln!(out, "  1. Only common nouns in the singular count")?;
    writeln!(out, "  2. Each letter can be used as many times as it appears in the source word")?;
    writeln!(out, "  3. Guess the required number of words to open the next level")?;
    writeln!(out, "  4. The letters Е and Ё are interchangeable\n")?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  next (n)   go to the next level")?;
    writeln!(out, "  prev (p)   go to the previous level")?;
    writeln!(out, "  words (w)  show the current level and guessed words")?;
    writeln!(out, "  quit (q)   save and exit\n")?;
    Ok(())
}

fn print_victory<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "        🎉 🎊 ✨  A L L   L E V E L S   C L E A R E D !  ✨ 🎊 🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    Ok(())
}

/// Start mode for the simple command, from a yes/no prompt answer
#[must_use]
pub fn start_mode_from_answer(answer: &str, can_continue: bool) -> StartMode {
    match answer.trim().to_lowercase().as_str() {
        "" | "y" | "yes" | "c" | "continue" if can_continue => StartMode::Continue,
        _ => StartMode::New,
    }
}
