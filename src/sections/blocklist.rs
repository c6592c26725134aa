//! Blocklist section - rejects passwords from the common-password list.

use crate::blocklist::is_blocklisted;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is one of the known-weak passwords.
///
/// # Returns
/// - `Some(reason)` if password is blocklisted; scoring stops here
/// - `None` if password is not in the blocklist
pub fn blocklist_section(password: &SecretString) -> Option<String> {
    if is_blocklisted(password.expose_secret()) {
        return Some("This password is extremely common! Choose a stronger one.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocklist_section_common_password() {
        let pwd = SecretString::new("password".to_string().into());
        let result = blocklist_section(&pwd);
        assert!(matches!(result, Some(reason) if reason.contains("common")));
    }

    #[test]
    fn test_blocklist_section_every_entry() {
        for entry in crate::blocklist::blocklist() {
            let pwd = SecretString::new(entry.to_string().into());
            assert!(blocklist_section(&pwd).is_some(), "{} not rejected", entry);
        }
    }

    #[test]
    fn test_blocklist_section_strong_password() {
        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        assert_eq!(blocklist_section(&pwd), None);
    }

    #[test]
    fn test_blocklist_section_is_case_sensitive() {
        let pwd = SecretString::new("LetMeIn".to_string().into());
        assert_eq!(blocklist_section(&pwd), None);
    }
}
