//! Formatting utilities for terminal output

/// Letters upper-cased and separated by spaces, e.g. `К О Р З И Н А`
#[must_use]
pub fn spaced_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string for `value` out of `max`
#[must_use]
pub fn progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `value` out of `max`, capped at 100
#[must_use]
pub fn percent(value: usize, max: usize) -> u16 {
    if max == 0 {
        return 100;
    }
    ((value * 100 / max).min(100)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters(&['к', 'о', 'т']), "К О Т");
        assert_eq!(spaced_letters(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(progress_bar(0, 5, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(progress_bar(5, 5, 10), "██████████");
    }

    #[test]
    fn progress_bar_overfull_is_capped() {
        assert_eq!(progress_bar(9, 5, 4), "████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(progress_bar(2, 4, 10), "█████░░░░░");
    }

    #[test]
    fn percent_caps() {
        assert_eq!(percent(1, 4), 25);
        assert_eq!(percent(8, 4), 100);
        assert_eq!(percent(0, 0), 100);
    }
}
