//! Display functions for command results

use super::formatters::progress_bar;
use crate::commands::{CheckResult, LevelSummary};
use crate::engine::Outcome;
use colored::Colorize;

/// Print the level listing
pub fn print_levels(levels: &[LevelSummary]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEVELS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for level in levels {
        let marker = if level.is_current { "▶" } else { " " };
        println!(
            "\n{} {}. {}  {}",
            marker.bright_yellow(),
            level.index + 1,
            level.name.bold(),
            level.source_word.bright_yellow().bold()
        );
        println!(
            "     [{}] {}/{} guessed, {} words in dictionary",
            progress_bar(level.guessed, level.required, 20).green(),
            level.guessed,
            level.required,
            level.dictionary_size
        );
        if level.dictionary_size == 0 {
            println!("     {}", "⚠ word list missing, nothing can be guessed".yellow());
        }
    }
    println!();
}

/// Print the result of a word check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {} ({})",
        result.word.to_uppercase().bright_yellow().bold(),
        result.source_word.bold(),
        result.level_name
    );
    println!("{}", "─".repeat(60).cyan());

    match result.outcome {
        Outcome::Accepted(_) => println!("{}", "✅ Valid word".green().bold()),
        Outcome::InvalidLetters => {
            let detail = result
                .missing_letter
                .map(|c| format!(" (no '{}' left)", c.to_uppercase()))
                .unwrap_or_default();
            println!("{}{}", "❌ Uses letters the level does not have".red().bold(), detail);
        }
        Outcome::NotInDictionary => println!("{}", "❌ Not in the level's word list".red().bold()),
        Outcome::NoOp => println!("{}", "Nothing to check".yellow()),
        other => println!("{other}"),
    }
}
