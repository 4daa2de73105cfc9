//! Error types for the lichviet-canchi crate.

/// Error type for all fallible operations in the lichviet-canchi crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanChiError {
    /// Returned when a lunar month number is outside the valid range 1..=12.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },
}
