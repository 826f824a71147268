//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no process calls, no config loading).

mod de;
pub mod document;
pub mod error;
pub mod field;
pub mod issue;
pub mod render;

pub use document::{Attrs, Mark, MarkKind, Node, NodeKind};
pub use error::{DomainError, DomainResult};
pub use field::{Field, FieldSchema, FieldScope};
pub use issue::{
    ChildIssue, CommentSummary, IssueContext, IssueKey, ParentSummary, RawComment, RawIssue,
};
pub use render::DocumentRenderer;
