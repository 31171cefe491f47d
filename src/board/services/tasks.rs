//! Service layer for task creation, lookup, listing, editing, and removal.

use super::{BoardServiceError, BoardServiceResult, access::require_member};
use crate::board::{
    domain::{
        MemberId, NewTaskData, PositionPolicy, ProjectId, Task, TaskId, TaskName, TaskStatus,
        UserId, WorkspaceId,
    },
    ports::{MembershipDirectory, TaskFilter, TaskStore},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    status: String,
    workspace_id: String,
    project_id: String,
    assignee_id: String,
    due_date: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with every required field.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        workspace_id: impl Into<String>,
        project_id: impl Into<String>,
        assignee_id: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            workspace_id: workspace_id.into(),
            project_id: project_id.into(),
            assignee_id: assignee_id.into(),
            due_date: due_date.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn validate(self) -> BoardServiceResult<NewTaskData> {
        Ok(NewTaskData {
            name: TaskName::new(self.name)?,
            status: TaskStatus::try_from(self.status.as_str())?,
            workspace_id: WorkspaceId::new(self.workspace_id)?,
            project_id: ProjectId::new(self.project_id)?,
            assignee_id: MemberId::new(self.assignee_id)?,
            due_date: parse_due_date(&self.due_date)?,
            description: self.description,
        })
    }
}

/// Request payload for a partial task edit.
///
/// Unset fields are left unchanged. Changing the status here does not
/// renumber any column; board moves go through
/// [`BoardService`](super::BoardService).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    name: Option<String>,
    status: Option<String>,
    project_id: Option<String>,
    assignee_id: Option<String>,
    due_date: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the task.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Changes the task status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Moves the task to another project.
    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Reassigns the task.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Changes the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates every field before any of them is applied, so a bad field
    /// leaves the task untouched.
    fn apply(self, task: &mut Task, clock: &impl Clock) -> BoardServiceResult<()> {
        let name = self.name.map(TaskName::new).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;
        let project_id = self.project_id.map(ProjectId::new).transpose()?;
        let assignee_id = self.assignee_id.map(MemberId::new).transpose()?;
        let due_date = self.due_date.as_deref().map(parse_due_date).transpose()?;

        if let Some(value) = name {
            task.rename(value, clock);
        }
        if let Some(value) = status {
            task.set_status(value, clock);
        }
        if let Some(value) = project_id {
            task.set_project(value, clock);
        }
        if let Some(value) = assignee_id {
            task.set_assignee(value, clock);
        }
        if let Some(value) = due_date {
            task.set_due_date(value, clock);
        }
        if let Some(value) = self.description {
            task.set_description(Some(value), clock);
        }
        Ok(())
    }
}

fn parse_due_date(raw: &str) -> BoardServiceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|value| value.with_timezone(&Utc))
        .map_err(|_| BoardServiceError::InvalidDueDate(raw.to_owned()))
}

/// Task management service gated by workspace membership.
pub struct TaskService<S, M, C>
where
    S: TaskStore,
    M: MembershipDirectory,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    membership: Arc<M>,
    clock: Arc<C>,
    policy: PositionPolicy,
}

impl<S, M, C> Clone for TaskService<S, M, C>
where
    S: TaskStore,
    M: MembershipDirectory,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            membership: Arc::clone(&self.membership),
            clock: Arc::clone(&self.clock),
            policy: self.policy,
        }
    }
}

impl<S, M, C> TaskService<S, M, C>
where
    S: TaskStore,
    M: MembershipDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a task service with the default position policy.
    #[must_use]
    pub fn new(store: Arc<S>, membership: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            store,
            membership,
            clock,
            policy: PositionPolicy::default(),
        }
    }

    /// Replaces the position policy used for new tasks.
    #[must_use]
    pub const fn with_policy(mut self, policy: PositionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Creates a task at the bottom of its column.
    ///
    /// The new position is one step past the highest position in the same
    /// workspace column, or the first step when the column is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when validation fails, the actor is not
    /// a workspace member, or the store rejects the write.
    pub async fn create(
        &self,
        actor: &UserId,
        request: CreateTaskRequest,
    ) -> BoardServiceResult<Task> {
        let data = request.validate()?;
        require_member(&*self.membership, &data.workspace_id, actor).await?;

        let highest = self
            .store
            .highest_position(&data.workspace_id, data.status)
            .await?;
        let position = self.policy.next_after(highest);
        let task = Task::new(data, position, &*self.clock);
        self.store.store(&task).await?;

        info!(
            task_id = %task.id(),
            workspace_id = %task.workspace_id(),
            status = %task.status(),
            position = %task.position(),
            "created task"
        );
        Ok(task)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the task does not exist,
    /// or [`BoardServiceError::Unauthorized`] when the actor is not a member
    /// of the task's workspace.
    pub async fn get(&self, actor: &UserId, id: &TaskId) -> BoardServiceResult<Task> {
        let task = self.load(id).await?;
        require_member(&*self.membership, task.workspace_id(), actor).await?;
        Ok(task)
    }

    /// Lists a workspace's tasks, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthorized`] when the actor is not a
    /// member of the filtered workspace, or [`BoardServiceError::Store`] when
    /// listing fails.
    pub async fn list(
        &self,
        actor: &UserId,
        filter: &TaskFilter,
    ) -> BoardServiceResult<Vec<Task>> {
        require_member(&*self.membership, filter.workspace_id(), actor).await?;
        Ok(self.store.list(filter).await?)
    }

    /// Applies a partial edit to a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the task is missing, the actor is
    /// not a member of its workspace, a field fails validation, or the store
    /// rejects the write.
    pub async fn update(
        &self,
        actor: &UserId,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> BoardServiceResult<Task> {
        let mut task = self.load(id).await?;
        require_member(&*self.membership, task.workspace_id(), actor).await?;

        request.apply(&mut task, &*self.clock)?;
        self.store.update(&task).await?;
        info!(task_id = %task.id(), "updated task");
        Ok(task)
    }

    /// Deletes a task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the task is missing, the actor is
    /// not a member of its workspace, or the store rejects the delete.
    pub async fn delete(&self, actor: &UserId, id: &TaskId) -> BoardServiceResult<TaskId> {
        let task = self.load(id).await?;
        require_member(&*self.membership, task.workspace_id(), actor).await?;

        self.store.delete(task.id()).await?;
        info!(task_id = %task.id(), "deleted task");
        Ok(task.id().clone())
    }

    async fn load(&self, id: &TaskId) -> BoardServiceResult<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BoardServiceError::NotFound(id.clone()))
    }
}
