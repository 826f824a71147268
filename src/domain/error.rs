//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the domain model.
/// Document rendering has none: it is total.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid issue key: {0:?}")]
    InvalidIssueKey(String),

    #[error("invalid field scope: {0} (expected custom, system or all)")]
    InvalidFieldScope(String),

    #[error("invalid field list: {0}")]
    InvalidFieldList(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
