use std::path::PathBuf;
use thiserror::Error;

/// All errors surfaced by the sales pipeline.
///
/// Row-level validation failures are not errors: invalid rows are
/// silently dropped by the cleaner and only show up in the raw-vs-clean
/// row counts. This type covers the fatal tier only.
#[derive(Error, Debug)]
pub enum SalesError {
    /// The input file could not be opened or read.
    #[error("Failed to read sales file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for raw I/O errors that do not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the sales crates.
pub type Result<T> = std::result::Result<T, SalesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SalesError::FileRead {
            path: PathBuf::from("/data/ventas_raw.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read sales file"));
        assert!(msg.contains("/data/ventas_raw.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SalesError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: SalesError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
