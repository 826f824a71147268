//! Issue tracker backed by the `jira` command line client

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{ChildIssue, IssueKey, RawIssue};
use crate::infrastructure::traits::{CommandOutput, CommandRunner, IssueTracker};
use crate::infrastructure::{InfraError, InfraResult};

const CHILD_COLUMNS: &str = "KEY,STATUS,SUMMARY";

/// `IssueTracker` that shells out to `jira`.
pub struct JiraCli {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl JiraCli {
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> InfraResult<CommandOutput> {
        debug!("run: {} {}", self.program, args.join(" "));
        let output = self
            .runner
            .run(&self.program, args)
            .map_err(|e| InfraError::io(format!("spawn {}", self.program), e))?;

        if !output.success() {
            return Err(InfraError::Command {
                message: format!(
                    "{} {}: {}",
                    self.program,
                    args.iter().take(2).copied().collect::<Vec<_>>().join(" "),
                    output.stderr_lossy().trim()
                ),
                exit_code: output.code,
            });
        }
        Ok(output)
    }
}

impl IssueTracker for JiraCli {
    #[instrument(level = "debug", skip(self, key), fields(key = %key))]
    fn view(&self, key: &IssueKey) -> InfraResult<RawIssue> {
        let output = self.run(&["issue", "view", key.as_str(), "--raw"])?;
        serde_json::from_slice(&output.stdout).map_err(|e| InfraError::Decode {
            context: format!("issue view {key}"),
            source: e,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn list_children(&self, parent_key: &str, project: &str) -> InfraResult<Vec<ChildIssue>> {
        let jql = format!("\"Parent Link\" = {parent_key}");
        let output = self.run(&[
            "issue",
            "list",
            "-p",
            project,
            "--jql",
            &jql,
            "--plain",
            "--no-headers",
            "--columns",
            CHILD_COLUMNS,
        ])?;
        Ok(parse_child_listing(&output.stdout_lossy()))
    }
}

/// Parse `KEY<TAB>STATUS<TAB>SUMMARY` lines. Lines with fewer than three
/// columns are skipped; extra columns are ignored.
pub fn parse_child_listing(stdout: &str) -> Vec<ChildIssue> {
    stdout
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.trim().split('\t').collect();
            if parts.len() < 3 {
                return None;
            }
            Some(ChildIssue {
                key: parts[0].to_string(),
                status: parts[1].to_string(),
                summary: parts[2].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_listing_when_parsing_then_maps_columns() {
        let children =
            parse_child_listing("ATH-2\tIn Progress\tWire it up\nATH-3\tDone\tShip it\n");
        assert_eq!(
            children,
            vec![
                ChildIssue {
                    key: "ATH-2".into(),
                    status: "In Progress".into(),
                    summary: "Wire it up".into(),
                },
                ChildIssue {
                    key: "ATH-3".into(),
                    status: "Done".into(),
                    summary: "Ship it".into(),
                },
            ]
        );
    }

    #[test]
    fn given_short_or_blank_lines_when_parsing_then_skips_them() {
        let children = parse_child_listing("\nATH-2\tDone\n  ATH-4\tTodo\tPadded  \n");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].key, "ATH-4");
        assert_eq!(children[0].summary, "Padded");
    }

    #[test]
    fn given_extra_columns_when_parsing_then_ignores_them() {
        let children = parse_child_listing("A-1\tDone\tSummary\textra");
        assert_eq!(children[0].summary, "Summary");
    }
}
