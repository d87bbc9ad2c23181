//! Error types for the greeter.

use thiserror::Error;

/// Errors that can occur while emitting the greeting.
///
/// The greeter itself has no failure modes; the only fallible step is the
/// write to the output stream (e.g. a closed pipe on the receiving end).
#[derive(Debug, Error)]
pub enum GreeterError {
    /// The greeting could not be written to the output stream.
    #[error("failed to write greeting: {0}")]
    Write(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = GreeterError::from(io_err);
        assert_eq!(err.to_string(), "failed to write greeting: pipe closed");
    }
}
