//! Application services

pub mod context;
pub mod fields;

pub use context::{build_context, ContextService};
pub use fields::FieldService;
