//! Alert delivery error types.

/// Alert delivery error with source location.
///
/// Raised by notification sinks when a local alert cannot be
/// delivered. Best-effort sinks swallow these at the composite layer.
#[derive(Debug, Clone)]
pub struct AlertError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AlertError {
    /// Create a new AlertError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AlertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alert Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for AlertError {}
