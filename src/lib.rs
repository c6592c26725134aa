//! Password generation and strength scoring library
//!
//! This library generates random passwords from the operating system's
//! CSPRNG and classifies password strength with fixed heuristics: a
//! common-password blocklist, a length score and a character-variety score.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced, cancellable strength check
//!   in [`handlers`]
//! - `tracing`: Enables logging via tracing crate (passwords are never logged)
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{generate_password, score_password, PasswordStrength};
//! use secrecy::ExposeSecret;
//!
//! let password = generate_password();
//! assert!((12..=18).contains(&password.expose_secret().len()));
//!
//! assert_eq!(score_password("letmein"), PasswordStrength::Blocklisted);
//! assert_eq!(score_password("Aa1!Aa1!Aa1!Aa1!Aa"), PasswordStrength::Strong);
//! ```

// Internal modules
mod alphabet;
mod blocklist;
mod evaluator;
mod generator;
mod sections;
mod types;

pub mod handlers;

// Public API
pub use alphabet::{ALPHABET, CharClass, SYMBOLS};
pub use blocklist::{blocklist, is_blocklisted};
pub use evaluator::{evaluate_password_strength, score_password};
pub use generator::{MAX_LENGTH, MIN_LENGTH, generate_password};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};
