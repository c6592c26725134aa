//! Result types returned by the strength scorer.

use std::fmt;

/// Composite strength score, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PasswordScore(f64);

impl PasswordScore {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Qualitative classification of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    /// Exact match with a known-weak password; no score is computed.
    Blocklisted,
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Classifies a composite score: below 0.4 is weak, below 0.7 moderate,
    /// anything else strong.
    pub fn from_score(score: PasswordScore) -> Self {
        let value = score.value();
        if value < 0.4 {
            PasswordStrength::Weak
        } else if value < 0.7 {
            PasswordStrength::Moderate
        } else {
            PasswordStrength::Strong
        }
    }

    pub fn is_blocklisted(&self) -> bool {
        matches!(self, PasswordStrength::Blocklisted)
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Blocklisted => "Blocklisted",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Detailed outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub length_score: f64,
    pub variety_score: f64,
    /// `None` when the password is blocklisted.
    pub score: Option<PasswordScore>,
    /// Human-readable hints, in section order.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        match self.score {
            Some(score) => PasswordStrength::from_score(score),
            None => PasswordStrength::Blocklisted,
        }
    }
}
