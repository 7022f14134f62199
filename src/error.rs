use thiserror::Error;

/// Result type for operations at the I/O boundary.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the input layer. The distance functions themselves are
/// total and never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected two whitespace-separated strings, found {found}")]
    MissingInput { found: usize },
}
