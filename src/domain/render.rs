//! Document tree to Markdown-like text
//!
//! Rendering is a pure pre-order fold over the tree. It never fails: missing
//! fields fall back to fixed defaults (`@unknown`, `[link]`, heading level 1,
//! empty language tag) and unknown node kinds pass their children through.

use serde_json::Value;
use tracing::instrument;

use crate::domain::document::{Mark, MarkKind, Node, NodeKind};

const UNKNOWN_MENTION: &str = "unknown";
const LINK_PLACEHOLDER: &str = "[link]";
const DEFAULT_HEADING_LEVEL: usize = 1;
/// Deepest heading ADF defines; larger levels render at this depth.
const MAX_HEADING_LEVEL: usize = 6;

/// Renders document trees into text.
pub struct DocumentRenderer;

impl DocumentRenderer {
    /// Render a decoded tree.
    #[instrument(level = "trace", skip_all, fields(kind = node.kind.as_str()))]
    pub fn render(node: &Node) -> String {
        Self::render_node(node)
    }

    /// Render raw JSON. Values that are not objects render to an empty string.
    pub fn render_value(value: &Value) -> String {
        Self::render(&Node::from(value))
    }

    fn render_node(node: &Node) -> String {
        match &node.kind {
            NodeKind::Text => apply_marks(node.text.as_deref().unwrap_or_default(), &node.marks),
            NodeKind::HardBreak => "\n".to_string(),
            NodeKind::Mention => format!(
                "@{}",
                node.attrs.text.as_deref().unwrap_or(UNKNOWN_MENTION)
            ),
            NodeKind::InlineCard => node
                .attrs
                .url
                .clone()
                .unwrap_or_else(|| LINK_PLACEHOLDER.to_string()),
            _ => {
                let parts: Vec<String> = node.content.iter().map(Self::render_node).collect();
                wrap_container(node, parts)
            }
        }
    }
}

/// Fold marks left to right; each mark wraps the result of the previous ones.
fn apply_marks(text: &str, marks: &[Mark]) -> String {
    marks
        .iter()
        .fold(text.to_string(), |acc, mark| match mark.kind {
            MarkKind::Code => format!("`{acc}`"),
            MarkKind::Strong => format!("**{acc}**"),
            MarkKind::Em => format!("_{acc}_"),
            MarkKind::Other(_) => acc,
        })
}

fn wrap_container(node: &Node, parts: Vec<String>) -> String {
    match &node.kind {
        NodeKind::Paragraph => format!("{}\n", parts.concat()),
        NodeKind::ListItem => format!("- {}\n", parts.concat().trim()),
        NodeKind::CodeBlock => {
            let language = node.attrs.language.as_deref().unwrap_or_default();
            format!("```{language}\n{}\n```\n", parts.concat())
        }
        NodeKind::Heading => {
            let level = node
                .attrs
                .level
                .unwrap_or(DEFAULT_HEADING_LEVEL)
                .min(MAX_HEADING_LEVEL);
            format!("{} {}\n", "#".repeat(level), parts.concat().trim())
        }
        // Quote prefix goes on each child's output, not on each line.
        NodeKind::Blockquote => parts.iter().map(|part| format!("> {part}")).collect(),
        _ => parts.concat(),
    }
}
