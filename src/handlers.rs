//! Event handlers for a presentation layer.
//!
//! A UI wires its buttons to these functions and renders the returned
//! [`Notice`]; nothing here depends on a UI toolkit.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password_strength;
use crate::generator::generate_password;
use crate::types::PasswordStrength;

#[cfg(feature = "async")]
use crate::types::PasswordEvaluation;

/// Error reported by a platform clipboard implementation.
pub type ClipboardError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("There is no password to copy")]
    EmptyField,
    #[error("Failed to write to clipboard: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message for the user, ready to be shown in a dialog or status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    /// Maps a strength classification to the notice the user sees.
    ///
    /// Blocklisted passwords are reported as an error, distinct from a plain weak one.
    pub fn for_strength(strength: PasswordStrength) -> Self {
        match strength {
            PasswordStrength::Blocklisted => Notice {
                severity: Severity::Error,
                title: "Weak Password",
                message: "This password is extremely common! Choose a stronger one.",
            },
            PasswordStrength::Weak => Notice {
                severity: Severity::Warning,
                title: "Weak Password",
                message: "Weak Password! Add uppercase, numbers, and special characters.",
            },
            PasswordStrength::Moderate => Notice {
                severity: Severity::Info,
                title: "Moderate Password",
                message: "Moderate Password! Try making it longer for better security.",
            },
            PasswordStrength::Strong => Notice {
                severity: Severity::Info,
                title: "Strong Password",
                message: "Strong Password!",
            },
        }
    }
}

/// Destination for copied passwords, implemented by the platform layer.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Handles the "generate" action.
pub fn on_generate() -> SecretString {
    generate_password()
}

/// Handles the "copy" action for the password currently shown in `field`.
///
/// # Errors
///
/// Returns [`HandlerError::EmptyField`] without touching the clipboard when
/// `field` is empty, or [`HandlerError::Clipboard`] if the clipboard rejects
/// the write.
pub fn on_copy<C: Clipboard>(clipboard: &mut C, field: &SecretString) -> Result<Notice, HandlerError> {
    let text = field.expose_secret();
    if text.is_empty() {
        return Err(HandlerError::EmptyField);
    }

    clipboard.set_text(text)?;

    Ok(Notice {
        severity: Severity::Info,
        title: "Copied",
        message: "Password copied to clipboard!",
    })
}

/// Handles the "check strength" action.
pub fn on_check_strength(input: &SecretString) -> Notice {
    Notice::for_strength(evaluate_password_strength(input).strength())
}

/// Delay before a keystroke-triggered check runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Debounced strength check that sends its evaluation via channel.
///
/// Intended for live checking as the user types: the caller cancels `token`
/// when a newer keystroke arrives, and a cancelled check sends nothing.
#[cfg(feature = "async")]
pub async fn check_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength check superseded before it started");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
