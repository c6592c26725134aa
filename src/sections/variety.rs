//! Character variety section - checks for uppercase, lowercase, digits, symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;
use crate::alphabet::CharClass;

/// Scores the password by the fraction of the four character classes it contains.
///
/// # Returns
/// A score in quarter steps, with a reason naming the missing classes if any.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let missing = CharClass::missing_from(password.expose_secret());
    let present = CharClass::ALL.len() - missing.len();
    let value = present as f64 / CharClass::ALL.len() as f64;

    let reason = (!missing.is_empty()).then(|| {
        let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
        format!("Missing: {}", names.join(", "))
    });
    SectionScore { value, reason }
}
