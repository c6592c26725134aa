//! Character classes and the alphabet generated passwords are drawn from.

use std::fmt;

/// Punctuation symbols recognised by the variety check and used by the generator.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~";

/// Full generation alphabet: uppercase, lowercase, digits, then [`SYMBOLS`].
pub const ALPHABET: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!@#$%^&*()_+-=[]{}|;:,.<>?/~",
);

/// The four character classes counted by the variety score.
///
/// Membership is ASCII-only: accented letters or other scripts match no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => SYMBOLS.contains(c),
        }
    }

    /// True if at least one character of `s` belongs to this class.
    pub fn is_present_in(self, s: &str) -> bool {
        s.chars().any(|c| self.matches(c))
    }

    /// Classes with no representative in `s`, in [`CharClass::ALL`] order.
    pub fn missing_from(s: &str) -> Vec<CharClass> {
        Self::ALL
            .into_iter()
            .filter(|class| !class.is_present_in(s))
            .collect()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}
