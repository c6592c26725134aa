//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{SectionScore, blocklist_section, character_variety_section, length_section};
use crate::types::{PasswordEvaluation, PasswordScore, PasswordStrength};

const LENGTH_WEIGHT: f64 = 0.5;
const VARIETY_WEIGHT: f64 = 0.5;

/// Evaluates password strength and returns a detailed evaluation.
///
/// A blocklisted password short-circuits: its evaluation carries no score and
/// its sub-scores are left at zero.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing sub-scores, composite score and reasons.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    if let Some(reason) = blocklist_section(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected by blocklist");
        return PasswordEvaluation {
            length_score: 0.0,
            variety_score: 0.0,
            score: None,
            reasons: vec![reason],
        };
    }

    let length = length_section(password);
    let variety = character_variety_section(password);
    let composite = LENGTH_WEIGHT * length.value + VARIETY_WEIGHT * variety.value;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length_score = length.value,
        variety_score = variety.value,
        composite,
        "password evaluated"
    );

    let reasons = [&length, &variety]
        .into_iter()
        .filter_map(|section: &SectionScore| section.reason.clone())
        .collect();

    PasswordEvaluation {
        length_score: length.value,
        variety_score: variety.value,
        score: Some(PasswordScore::new(composite)),
        reasons,
    }
}

/// Classifies a password, checking the blocklist before any scoring.
pub fn score_password(password: &str) -> PasswordStrength {
    let secret = SecretString::new(password.into());
    evaluate_password_strength(&secret).strength()
}
