use thiserror::Error;

/// Why an aggregation run could not produce a report.
///
/// Cancellation is not an error: a cancelled run still returns the rows it
/// finished, flagged as partial.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no node selected")]
    NoSelection,

    #[error("Unknown location of current tree.")]
    UnknownLocation,

    #[error("node {0} does not exist in the loaded tree")]
    Missing(String),

    #[error("tree service: {0:#}")]
    Service(#[from] anyhow::Error),

    #[error("report i/o: {0}")]
    Io(#[from] std::io::Error),
}
