/// Type alias for `Result<T, cli::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// Anything that stops a run of the tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    VerticesError(#[from] bmtools_vertices::Error),

    #[error(transparent)]
    PlotError(#[from] bmtools_plot::Error),

    #[error("failed to initialise logging")]
    LoggerError(#[from] log::SetLoggerError),
}
