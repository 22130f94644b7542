//! Letter canonicalization
//!
//! Russian orthography treats `ё` and `е` as interchangeable in this game, so every
//! comparison (level letters, dictionary entries, player input) runs on folded text.

/// Fold a single character to its canonical form
///
/// Lowercases the character and maps `ё` to `е`.
///
/// # Examples
/// ```
/// use word_from_word::core::canonical_char;
///
/// assert_eq!(canonical_char('Ё'), 'е');
/// assert_eq!(canonical_char('К'), 'к');
/// ```
#[must_use]
pub fn canonical_char(c: char) -> char {
    match c {
        'ё' | 'Ё' => 'е',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Fold a whole string: trim surrounding whitespace, then fold every character
///
/// # Examples
/// ```
/// use word_from_word::core::canonicalize;
///
/// assert_eq!(canonicalize("  ЁЛКА "), "елка");
/// ```
#[must_use]
pub fn canonicalize(text: &str) -> String {
    text.trim().chars().map(canonical_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yo_folds_to_ye() {
        assert_eq!(canonical_char('ё'), 'е');
        assert_eq!(canonical_char('Ё'), 'е');
        assert_eq!(canonical_char('е'), 'е');
        assert_eq!(canonical_char('Е'), 'е');
    }

    #[test]
    fn cyrillic_uppercase_lowered() {
        assert_eq!(canonicalize("КОРЗИНА"), "корзина");
        assert_eq!(canonicalize("ПаРоВоЗ"), "паровоз");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(canonicalize("\t кино \n"), "кино");
        assert_eq!(canonicalize("   "), "");
    }

    #[test]
    fn inner_whitespace_kept() {
        assert_eq!(canonicalize(" ко но "), "ко но");
    }

    #[test]
    fn ascii_passes_through_lowercased() {
        assert_eq!(canonicalize("Crane"), "crane");
    }
}
