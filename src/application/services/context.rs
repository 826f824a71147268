//! Issue context service
//!
//! Assembles the context report for one issue: core fields, rendered
//! description, latest comments, parent, children and siblings.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{
    extract_comments, extract_description, ApplicationError, ApplicationResult, ResultExt,
};
use crate::domain::issue::{display_name_of, name_of, project_of};
use crate::domain::{ChildIssue, IssueContext, IssueKey, ParentSummary, RawIssue};
use crate::infrastructure::traits::IssueTracker;

/// Service for building issue context reports.
pub struct ContextService {
    tracker: Arc<dyn IssueTracker>,
    comment_limit: usize,
}

impl ContextService {
    /// Create a new context service keeping the last `comment_limit` comments.
    pub fn new(tracker: Arc<dyn IssueTracker>, comment_limit: usize) -> Self {
        Self {
            tracker,
            comment_limit,
        }
    }

    /// Build the report for an issue key or browse URL.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, input: &str) -> ApplicationResult<IssueContext> {
        let key = IssueKey::parse(input)?;
        let issue = self
            .tracker
            .view(&key)
            .map_err(|e| ApplicationError::IssueFetch {
                key: key.to_string(),
                source: Box::new(e),
            })?;
        debug!("build: fetched {}", issue.key);

        let mut context = build_context(&issue, self.comment_limit);
        let project = project_of(&context.key).to_string();

        context.children = self.children_of(&context.key, &project);
        if let Some(parent) = &context.parent {
            context.siblings = self.children_of(&parent.key, &project);
        }

        Ok(context)
    }

    /// Build the report and serialize it as pretty JSON.
    pub fn build_json(&self, input: &str) -> ApplicationResult<String> {
        self.build(input)?
            .to_json_pretty()
            .with_context("serialize context report")
    }

    /// Child listing is best effort: failures are logged and yield no children.
    fn children_of(&self, parent_key: &str, project: &str) -> Vec<ChildIssue> {
        match self.tracker.list_children(parent_key, project) {
            Ok(children) => {
                debug!("children_of: {} has {} children", parent_key, children.len());
                children
            }
            Err(e) => {
                warn!("list children of {} failed: {}", parent_key, e);
                Vec::new()
            }
        }
    }
}

/// Report fields derivable from the issue payload alone.
/// `children` and `siblings` are left empty.
pub fn build_context(issue: &RawIssue, comment_limit: usize) -> IssueContext {
    let fields = &issue.fields;
    IssueContext {
        key: issue.key.clone(),
        summary: fields.summary.clone(),
        status: name_of(fields.status.as_ref()),
        issue_type: name_of(fields.issuetype.as_ref()),
        assignee: display_name_of(fields.assignee.as_ref()),
        reporter: display_name_of(fields.reporter.as_ref()),
        created: fields.created.clone(),
        updated: fields.updated.clone(),
        description: extract_description(fields.description.as_ref()),
        parent: fields.parent.as_ref().map(ParentSummary::from),
        children: Vec::new(),
        siblings: Vec::new(),
        comments: extract_comments(fields.comments(), comment_limit),
    }
}
