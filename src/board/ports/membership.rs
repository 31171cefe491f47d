//! Membership port used to authorise workspace access and manage members.

use crate::board::domain::{Member, MemberId, MemberRole, UserId, WorkspaceId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for membership lookups.
pub type MembershipResult<T> = Result<T, MembershipError>;

/// Workspace membership contract.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// Finds the membership of `user_id` in `workspace_id`.
    ///
    /// Returns `None` when the user is not a member.
    async fn find_member(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> MembershipResult<Option<Member>>;

    /// Finds a membership by its identifier.
    async fn find_by_id(&self, id: &MemberId) -> MembershipResult<Option<Member>>;

    /// Lists the members of a workspace ordered by member identifier.
    async fn list_members(&self, workspace_id: &WorkspaceId) -> MembershipResult<Vec<Member>>;

    /// Removes a membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::NotFound`] when no such membership exists.
    async fn remove(&self, id: &MemberId) -> MembershipResult<()>;

    /// Changes the role of a membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::NotFound`] when no such membership exists.
    async fn update_role(&self, id: &MemberId, role: MemberRole) -> MembershipResult<Member>;
}

/// Errors returned by membership directory implementations.
#[derive(Debug, Clone, Error)]
pub enum MembershipError {
    /// The membership does not exist.
    #[error("member not found: {0}")]
    NotFound(MemberId),

    /// Backend failure.
    #[error("membership lookup failed: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl MembershipError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
