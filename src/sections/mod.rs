//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength.

mod blocklist;
mod length;
mod variety;

pub use blocklist::blocklist_section;
pub use length::length_section;
pub use variety::character_variety_section;

/// Outcome of a scoring section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionScore {
    /// Sub-score in `[0, 1]`.
    pub value: f64,
    /// Hint shown to the user when the section is not fully satisfied.
    pub reason: Option<String>,
}
