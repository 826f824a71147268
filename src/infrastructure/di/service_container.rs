//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ContextService, FieldService};
use crate::config::Settings;
use crate::infrastructure::jira::JiraCli;
use crate::infrastructure::traits::{CommandRunner, IssueTracker, RealCommandRunner};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Issue tracker abstraction
    pub tracker: Arc<dyn IssueTracker>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_runner(settings, Arc::new(RealCommandRunner))
    }

    /// Create a service container that drives `jira` through a custom runner.
    pub fn with_runner(settings: Settings, cmd: Arc<dyn CommandRunner>) -> Self {
        let tracker: Arc<dyn IssueTracker> =
            Arc::new(JiraCli::new(cmd.clone(), settings.jira_command.clone()));
        Self::with_deps(settings, cmd, tracker)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        cmd: Arc<dyn CommandRunner>,
        tracker: Arc<dyn IssueTracker>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            cmd,
            tracker,
        }
    }

    pub fn context_service(&self) -> ContextService {
        ContextService::new(self.tracker.clone(), self.settings.comment_limit)
    }

    pub fn field_service(&self) -> FieldService {
        FieldService::new(self.settings.clone())
    }
}
