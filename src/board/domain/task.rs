//! Task aggregate and workspace membership records.

use super::{
    BoardCard, BoardDomainError, MemberId, Position, ProjectId, TaskId, TaskStatus, UserId,
    WorkspaceId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    /// Creates a task name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when nothing remains after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskName {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(value: TaskName) -> Self {
        value.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated fields for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Task title.
    pub name: TaskName,
    /// Initial column.
    pub status: TaskStatus,
    /// Owning workspace.
    pub workspace_id: WorkspaceId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Assigned workspace member.
    pub assignee_id: MemberId,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    status: TaskStatus,
    position: Position,
    workspace_id: WorkspaceId,
    project_id: ProjectId,
    assignee_id: MemberId,
    due_date: DateTime<Utc>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub name: TaskName,
    /// Persisted column.
    pub status: TaskStatus,
    /// Persisted ordering key.
    pub position: Position,
    /// Persisted workspace.
    pub workspace_id: WorkspaceId,
    /// Persisted project.
    pub project_id: ProjectId,
    /// Persisted assignee.
    pub assignee_id: MemberId,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task at the given position.
    #[must_use]
    pub fn new(data: NewTaskData, position: Position, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::generate(),
            name: data.name,
            status: data.status,
            position,
            workspace_id: data.workspace_id,
            project_id: data.project_id,
            assignee_id: data.assignee_id,
            due_date: data.due_date,
            description: data.description,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            status: data.status,
            position: data.position,
            workspace_id: data.workspace_id,
            project_id: data.project_id,
            assignee_id: data.assignee_id,
            due_date: data.due_date,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the column the task sits in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the intra-column ordering key.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the owning workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the assigned member.
    #[must_use]
    pub const fn assignee_id(&self) -> &MemberId {
        &self.assignee_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Projects the fields the board reconciler cares about.
    #[must_use]
    pub fn card(&self) -> BoardCard {
        BoardCard::new(self.id.clone(), self.status, self.position)
    }

    /// Renames the task.
    pub fn rename(&mut self, name: TaskName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Moves the task to another column without renumbering anything.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Reassigns the task to another project.
    pub fn set_project(&mut self, project_id: ProjectId, clock: &impl Clock) {
        self.project_id = project_id;
        self.touch(clock);
    }

    /// Reassigns the task to another member.
    pub fn set_assignee(&mut self, assignee_id: MemberId, clock: &impl Clock) {
        self.assignee_id = assignee_id;
        self.touch(clock);
    }

    /// Changes the due date.
    pub fn set_due_date(&mut self, due_date: DateTime<Utc>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Applies a reconciled board placement.
    pub fn place(&mut self, status: TaskStatus, position: Position, clock: &impl Clock) {
        self.status = status;
        self.position = position;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Role a user holds within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    /// May manage the workspace and its members.
    Admin,
    /// Regular participant.
    Member,
}

/// Membership of a user in a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Membership row identifier.
    pub id: MemberId,
    /// Workspace the membership grants access to.
    pub workspace_id: WorkspaceId,
    /// Member user.
    pub user_id: UserId,
    /// Granted role.
    pub role: MemberRole,
}

impl Member {
    /// Returns `true` when the member may manage the workspace.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, MemberRole::Admin)
    }
}
