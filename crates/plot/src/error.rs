//! Result and Error types for bmtools-plot

/// Type alias for Result<T, plot::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `bmtools-plot` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure writing vtk output
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),
}
