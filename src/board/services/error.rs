//! Service-level errors shared by task and board services.

use crate::board::{
    domain::{
        BoardDomainError, BoardError, MemberId, ParseTaskStatusError, TaskId, UserId, WorkspaceId,
    },
    ports::{MembershipError, TaskStoreError},
};
use thiserror::Error;

/// Errors returned by board and task services.
#[derive(Debug, Clone, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// A status value could not be parsed.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// A due date was not an RFC 3339 timestamp.
    #[error("invalid due date '{0}', expected an RFC 3339 timestamp")]
    InvalidDueDate(String),

    /// The move does not fit the board it was applied to.
    #[error(transparent)]
    Move(#[from] BoardError),

    /// Task store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// Membership lookup failed.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// The acting user is not a member of the workspace.
    #[error("user {user_id} is not a member of workspace {workspace_id}")]
    Unauthorized {
        /// Workspace access was requested for.
        workspace_id: WorkspaceId,
        /// Acting user.
        user_id: UserId,
    },

    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A board update referenced a task owned by another workspace.
    #[error("task {task_id} does not belong to workspace {workspace_id}")]
    ForeignTask {
        /// Offending task.
        task_id: TaskId,
        /// Workspace the batch was issued for.
        workspace_id: WorkspaceId,
    },

    /// The membership does not exist.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    /// The acting member lacks the role the operation requires.
    #[error("user {user_id} may not manage member {member_id}")]
    Forbidden {
        /// Membership the operation targeted.
        member_id: MemberId,
        /// Acting user.
        user_id: UserId,
    },

    /// The operation would leave the workspace without a manageable member.
    #[error("workspace {0} has a single member, which cannot be removed or re-roled")]
    SoleMember(WorkspaceId),
}

/// Result type for board and task service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
