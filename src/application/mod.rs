//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod extract;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::ResultExt;
pub use extract::{extract_comments, extract_description};
