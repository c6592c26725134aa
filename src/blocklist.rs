//! Blocklist of known-weak passwords.
//!
//! The list is fixed at compile time and queried by exact, case-sensitive match.

use std::collections::HashSet;
use std::sync::LazyLock;

const COMMON_PASSWORDS: [&str; 10] = [
    "12345678",
    "password",
    "qwerty",
    "abc123",
    "letmein",
    "123456",
    "111111",
    "123123",
    "password1",
    "1234",
];

static BLOCKLIST: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORDS.into_iter().collect());

/// Returns the blocklisted passwords.
pub fn blocklist() -> &'static [&'static str] {
    &COMMON_PASSWORDS
}

/// Checks if a password is in the blocklist.
///
/// The comparison is exact: no trimming, no case folding, no Unicode normalization.
pub fn is_blocklisted(password: &str) -> bool {
    BLOCKLIST.contains(password)
}
