//! Issue entities: raw tracker payloads and the context report

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::de::null_as_default;
use crate::domain::document::Node;
use crate::domain::error::DomainError;

const BROWSE_SEGMENT: &str = "/browse/";

/// Issue key such as `ATH-1681`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey(String);

impl IssueKey {
    /// Parse a bare key or a browse URL (`https://host/browse/KEY`).
    ///
    /// Everything up to and including the last `/browse/` is dropped.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let key = match input.rfind(BROWSE_SEGMENT) {
            Some(pos) => &input[pos + BROWSE_SEGMENT.len()..],
            None => input,
        }
        .trim();

        if key.is_empty() {
            return Err(DomainError::InvalidIssueKey(input.to_string()));
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Project prefix: the part before the first `-`.
    pub fn project(&self) -> &str {
        project_of(&self.0)
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project prefix of any key string.
pub fn project_of(key: &str) -> &str {
    key.split('-').next().unwrap_or(key)
}

// ============================================================
// Raw payloads (`jira issue view KEY --raw`)
// ============================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Named {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComment {
    pub author: Option<Person>,
    pub created: Option<String>,
    pub body: Option<Node>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCommentPage {
    #[serde(deserialize_with = "null_as_default")]
    pub comments: Vec<RawComment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParentFields {
    pub summary: Option<String>,
    pub status: Option<Named>,
    pub issuetype: Option<Named>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParent {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    pub fields: Option<RawParentFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFields {
    pub summary: Option<String>,
    pub status: Option<Named>,
    pub issuetype: Option<Named>,
    pub assignee: Option<Person>,
    pub reporter: Option<Person>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub description: Option<Node>,
    pub parent: Option<RawParent>,
    pub comment: Option<RawCommentPage>,
}

impl RawFields {
    pub fn comments(&self) -> &[RawComment] {
        self.comment
            .as_ref()
            .map(|page| page.comments.as_slice())
            .unwrap_or_default()
    }
}

/// Issue as returned by the tracker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIssue {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: RawFields,
}

impl RawIssue {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub(crate) fn name_of(named: Option<&Named>) -> Option<String> {
    named.and_then(|n| n.name.clone())
}

pub(crate) fn display_name_of(person: Option<&Person>) -> Option<String> {
    person.and_then(|p| p.display_name.clone())
}

// ============================================================
// Report
// ============================================================

/// Issue listed under a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildIssue {
    pub key: String,
    pub status: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentSummary {
    pub key: String,
    pub summary: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
}

impl From<&RawParent> for ParentSummary {
    fn from(parent: &RawParent) -> Self {
        let fields = parent.fields.as_ref();
        Self {
            key: parent.key.clone(),
            summary: fields.and_then(|f| f.summary.clone()),
            status: name_of(fields.and_then(|f| f.status.as_ref())),
            issue_type: name_of(fields.and_then(|f| f.issuetype.as_ref())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSummary {
    pub author: Option<String>,
    pub created: Option<String>,
    pub body: String,
}

/// Compact context report for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueContext {
    pub key: String,
    pub summary: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub description: Option<String>,
    pub parent: Option<ParentSummary>,
    pub children: Vec<ChildIssue>,
    pub siblings: Vec<ChildIssue>,
    pub comments: Vec<CommentSummary>,
}

impl IssueContext {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_browse_url_when_parsing_key_then_strips_prefix() {
        let key = IssueKey::parse("https://envato.atlassian.net/browse/ATH-1681").unwrap();
        assert_eq!(key.as_str(), "ATH-1681");
        assert_eq!(key.project(), "ATH");
    }

    #[test]
    fn given_padded_key_when_parsing_then_trims() {
        assert_eq!(IssueKey::parse("  ATH-7 \n").unwrap().to_string(), "ATH-7");
    }

    #[test]
    fn given_nested_browse_segments_when_parsing_then_uses_last() {
        let key = IssueKey::parse("a/browse/b/browse/C-1").unwrap();
        assert_eq!(key.as_str(), "C-1");
    }

    #[test]
    fn given_blank_input_when_parsing_then_fails() {
        assert!(matches!(
            IssueKey::parse("https://x/browse/  "),
            Err(DomainError::InvalidIssueKey(_))
        ));
        assert!(IssueKey::parse("").is_err());
    }

    #[test]
    fn given_key_without_dash_when_taking_project_then_returns_whole_key() {
        assert_eq!(project_of("NODASH"), "NODASH");
    }

    #[test]
    fn given_nulls_when_decoding_raw_issue_then_fields_are_absent() {
        let issue = RawIssue::from_json(
            r#"{"key":"A-1","fields":{"summary":null,"description":null,"comment":{"comments":[{"body":null}]}}}"#,
        )
        .unwrap();
        assert_eq!(issue.key, "A-1");
        assert!(issue.fields.summary.is_none());
        assert!(issue.fields.description.is_none());
        assert_eq!(issue.fields.comments().len(), 1);
        assert!(issue.fields.comments()[0].body.is_none());
    }

    #[test]
    fn given_null_comment_list_and_parent_key_when_decoding_then_defaults_apply() {
        let issue = RawIssue::from_json(
            r#"{"key":"A-1","fields":{"comment":{"comments":null},"parent":{"key":null}}}"#,
        )
        .unwrap();
        assert!(issue.fields.comments().is_empty());
        assert_eq!(issue.fields.parent.map(|p| p.key), Some(String::new()));
    }

    #[test]
    fn given_null_key_and_fields_when_decoding_then_defaults_apply() {
        let issue = RawIssue::from_json(r#"{"key":null,"fields":null}"#).unwrap();
        assert_eq!(issue.key, "");
        assert!(issue.fields.summary.is_none());
    }
}
