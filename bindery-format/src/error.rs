/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur compiling or applying number patterns.
///
/// Unparseable user *text* is not an error — parsing returns `None` for
/// that. This type covers configuration mistakes, surfaced eagerly at
/// compile time.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The pattern contains no digit, hash, or decimal marker, so the
    /// integer part cannot be located.
    #[error("invalid number pattern {pattern:?}: no digit positions found")]
    InvalidPattern { pattern: String },
}
