//! Text extraction from issue payloads
//!
//! Both extractors go through [`DocumentRenderer`] and trim its output.

use crate::domain::issue::display_name_of;
use crate::domain::{CommentSummary, DocumentRenderer, Node, RawComment};

/// Render a description tree; `None` when absent or blank.
pub fn extract_description(description: Option<&Node>) -> Option<String> {
    let text = DocumentRenderer::render(description?);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Summarize the last `limit` comments, oldest first.
pub fn extract_comments(comments: &[RawComment], limit: usize) -> Vec<CommentSummary> {
    let start = comments.len().saturating_sub(limit);
    comments[start..]
        .iter()
        .map(|comment| CommentSummary {
            author: display_name_of(comment.author.as_ref()),
            created: comment.created.clone(),
            body: comment
                .body
                .as_ref()
                .map(DocumentRenderer::render)
                .unwrap_or_default()
                .trim()
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::Person;
    use crate::domain::NodeKind;

    fn comment(n: usize) -> RawComment {
        RawComment {
            author: Some(Person {
                display_name: Some(format!("user{n}")),
            }),
            created: Some(format!("2024-01-0{n}T10:00:00.000+0000")),
            body: Some(
                Node::new(NodeKind::Paragraph).with_content(vec![Node::text(format!("c{n}"))]),
            ),
        }
    }

    #[test]
    fn given_absent_description_when_extracting_then_none() {
        assert_eq!(extract_description(None), None);
    }

    #[test]
    fn given_blank_description_when_extracting_then_none() {
        let doc = Node::new(NodeKind::Other("doc".into())).with_content(vec![
            Node::new(NodeKind::Paragraph),
            Node::new(NodeKind::Paragraph).with_content(vec![Node::text("   ")]),
        ]);
        assert_eq!(extract_description(Some(&doc)), None);
    }

    #[test]
    fn given_description_when_extracting_then_trims_render() {
        let doc = Node::new(NodeKind::Other("doc".into())).with_content(vec![
            Node::new(NodeKind::Paragraph).with_content(vec![Node::text("first")]),
            Node::new(NodeKind::Paragraph).with_content(vec![Node::text("second")]),
        ]);
        assert_eq!(
            extract_description(Some(&doc)).as_deref(),
            Some("first\nsecond")
        );
    }

    #[test]
    fn given_more_comments_than_limit_when_extracting_then_keeps_latest_in_order() {
        let comments: Vec<_> = (1..=7).map(comment).collect();

        let summaries = extract_comments(&comments, 5);

        let bodies: Vec<_> = summaries.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["c3", "c4", "c5", "c6", "c7"]);
        assert_eq!(summaries[0].author.as_deref(), Some("user3"));
    }

    #[test]
    fn given_zero_limit_when_extracting_then_empty() {
        assert!(extract_comments(&[comment(1)], 0).is_empty());
    }

    #[test]
    fn given_comment_without_body_or_author_when_extracting_then_uses_empty_body() {
        let summaries = extract_comments(&[RawComment::default()], 5);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].body, "");
        assert!(summaries[0].author.is_none());
        assert!(summaries[0].created.is_none());
    }
}
