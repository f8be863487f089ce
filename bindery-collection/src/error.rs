use bindery_model::RecordKey;

/// Result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors that can occur during reconciliation.
///
/// These indicate a programming or configuration mistake, not bad user
/// input — unparseable user *values* surface as validation messages, never
/// as errors here.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// The payload is neither an id list nor a keyed map, and is not
    /// normalizable to empty. Raised during normalization, before any
    /// record is touched.
    #[error("invalid payload: expected an id list or a keyed map, got {0}")]
    InvalidPayload(String),

    /// An insert is required but no record schema is configured to
    /// construct the new record.
    #[error("no record schema configured; cannot construct a record for key {0}")]
    MissingSchema(RecordKey),
}
