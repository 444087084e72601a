use thiserror::Error;

/// Errors produced while loading, scanning, or reporting.
///
/// An input too short to contain a single full window is *not* an error:
/// the scan returns an empty series and an absent best result, and the
/// reporting layer renders a "no data" outcome.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Scan parameters are degenerate (zero k, window, or step)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing the input sequence file
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Rendering the enrichment chart failed
    #[error("Chart error: {0}")]
    ChartError(String),
}
