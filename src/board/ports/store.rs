//! Store port for task persistence and listing.

use crate::board::domain::{MemberId, Position, ProjectId, Task, TaskId, TaskStatus, WorkspaceId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>>;

    /// Lists tasks matching `filter`, most recently created first.
    async fn list(&self, filter: &TaskFilter) -> TaskStoreResult<Vec<Task>>;

    /// Returns the highest position held by a task in the given workspace
    /// column, or `None` when the column is empty.
    async fn highest_position(
        &self,
        workspace_id: &WorkspaceId,
        status: TaskStatus,
    ) -> TaskStoreResult<Option<Position>>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Criteria for listing a workspace's tasks.
///
/// Every criterion other than the workspace is optional; set criteria are
/// combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    workspace_id: WorkspaceId,
    project_id: Option<ProjectId>,
    assignee_id: Option<MemberId>,
    status: Option<TaskStatus>,
    search: Option<String>,
    due_date: Option<NaiveDate>,
}

impl TaskFilter {
    /// Creates a filter matching every task in the workspace.
    #[must_use]
    pub const fn new(workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id,
            project_id: None,
            assignee_id: None,
            status: None,
            search: None,
            due_date: None,
        }
    }

    /// Restricts to one project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts to one assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: MemberId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Restricts to one column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to tasks whose name contains `search`, ignoring case.
    ///
    /// Blank search terms are ignored.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let term = search.into();
        let trimmed = term.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Restricts to tasks due on the given UTC calendar day.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the workspace being listed.
    #[must_use]
    pub const fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    /// Returns `true` when `task` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.workspace_id() == &self.workspace_id
            && self
                .project_id
                .as_ref()
                .is_none_or(|project_id| task.project_id() == project_id)
            && self
                .assignee_id
                .as_ref()
                .is_none_or(|assignee_id| task.assignee_id() == assignee_id)
            && self.status.is_none_or(|status| task.status() == status)
            && self.search.as_ref().is_none_or(|term| {
                task.name().as_str().to_lowercase().contains(term.as_str())
            })
            && self
                .due_date
                .is_none_or(|day| task.due_date().date_naive() == day)
    }
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
