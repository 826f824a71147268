//! Jira issue context.
//!
//! Renders the tracker's rich-text document trees (ADF) to Markdown-like
//! text and assembles compact JSON context reports for issues fetched
//! through the `jira` command line client.
//!
//! ```
//! use jiractx::domain::DocumentRenderer;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "type": "heading",
//!     "attrs": { "level": 2 },
//!     "content": [{ "type": "text", "text": "Title" }]
//! });
//! assert_eq!(DocumentRenderer::render_value(&doc), "## Title\n");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use application::services::{ContextService, FieldService};
pub use config::Settings;
pub use domain::{DocumentRenderer, Node};
pub use infrastructure::ServiceContainer;
