//! Error conversion helpers for fallible boundary calls

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting boundary results to `ApplicationResult` with context.
pub trait ResultExt<T> {
    /// Add context to a boundary error.
    ///
    /// # Example
    /// ```ignore
    /// context.to_json_pretty().with_context("serialize context report")?;
    /// ```
    fn with_context(self, context: impl Into<String>) -> ApplicationResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context(self, context: impl Into<String>) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: context.into(),
            source: Box::new(e),
        })
    }
}
