//! Error types shared by every command.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the entry point.
#[derive(Debug, Error)]
pub enum Error {
    /// The store could not be reached or did not answer the ping.
    #[error("failed to connect to store: {0}")]
    Connect(#[source] mongodb::error::Error),
    /// `add` was given an empty name.
    #[error("Cannot add an empty user")]
    EmptyName,
    /// An insert, query or decode against the collection failed.
    #[error("store operation failed: {0}")]
    Store(#[source] mongodb::error::Error),
    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
