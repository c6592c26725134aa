//! Length section - linear length score saturating at 18 characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

/// Length at which the length score reaches 1.0.
pub const SATURATION_LENGTH: usize = 18;

/// Scores the password length as `min(chars / 18, 1.0)`.
///
/// Length is counted in `char`s, not bytes.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    let value = (len as f64 / SATURATION_LENGTH as f64).min(1.0);
    let reason = (len < SATURATION_LENGTH).then(|| {
        format!("Password is shorter than {} characters", SATURATION_LENGTH)
    });
    SectionScore { value, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(s: &str) -> SectionScore {
        length_section(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_length_section_empty() {
        let result = score("");
        assert_eq!(result.value, 0.0);
        assert!(result.reason.is_some());
    }

    #[test]
    fn test_length_section_partial() {
        let result = score("abcdefghi");
        assert_eq!(result.value, 0.5);
        assert_eq!(
            result.reason,
            Some("Password is shorter than 18 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_saturates() {
        assert_eq!(score(&"x".repeat(18)), SectionScore { value: 1.0, reason: None });
        assert_eq!(score(&"x".repeat(40)).value, 1.0);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 9 two-byte characters
        assert_eq!(score("ééééééééé").value, 0.5);
    }
}
