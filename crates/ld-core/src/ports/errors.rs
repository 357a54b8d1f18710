use thiserror::Error;

/// The selected file could not be read. Reported once, never retried.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("file read failed: {0}")]
    Unreadable(String),
}

/// Failure modes of one import submission.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The transport itself failed (network error, timeout). The operation
    /// is strictly at-most-once; the user may trigger it again.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status. `message` is the
    /// optional server-supplied text, surfaced verbatim when present.
    #[error("import rejected by server")]
    Rejected { message: Option<String> },
}

/// Failure modes of the account update behind the survey submission.
#[derive(Debug, Error)]
pub enum AccountUpdateError {
    #[error("transport failure: {0}")]
    Transport(String),

    /// Non-success response; `message` is the server's `message` field.
    #[error("{message}")]
    Rejected { message: String },
}
