//! Post store error types.

/// Post store error with source location.
///
/// Raised when a query or status update against the external post
/// store fails.
#[derive(Debug, Clone)]
pub struct StoreError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with the given message at the current location.
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

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Store Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for StoreError {}
