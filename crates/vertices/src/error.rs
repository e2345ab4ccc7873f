//! Result and Error types for bmtools-vertices

/// Type alias for Result<T, vertices::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `bmtools-vertices` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// No `vertices ( ... );` construct in the text after removing comments
    #[error("vertices section not found")]
    SectionNotFound,

    /// The vertices section exists, but not one `(x y z)` entry was readable
    #[error("no coordinates parsed")]
    NoCoordinates,

    /// Grouping tolerance must be a finite value greater than zero
    #[error("tolerance must be finite and greater than zero (found {0})")]
    InvalidTolerance(f64),
}
