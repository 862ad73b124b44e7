use thiserror::Error;

/// Errors surfaced by the matching pipeline
#[derive(Debug, Error)]
pub enum MatchError {
    /// Structurally impossible request; surfaced before any solver work
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed input triples
    #[error("Malformed input data: {0}")]
    Data(String),

    /// Snapshot file could not be read or written
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or output could not be (de)serialized
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}
