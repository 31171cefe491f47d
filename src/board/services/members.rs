//! Workspace member listing, removal, and role changes.

use super::{BoardServiceError, BoardServiceResult, access::require_member};
use crate::board::{
    domain::{Member, MemberId, MemberRole, UserId, WorkspaceId},
    ports::MembershipDirectory,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Membership management service.
///
/// Any member may list the workspace and leave it. Removing someone else or
/// changing a role requires an admin. A workspace with a single member keeps
/// that member unchanged.
pub struct MemberService<M>
where
    M: MembershipDirectory,
{
    directory: Arc<M>,
}

impl<M> Clone for MemberService<M>
where
    M: MembershipDirectory,
{
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}

impl<M> MemberService<M>
where
    M: MembershipDirectory,
{
    /// Creates a member service.
    #[must_use]
    pub const fn new(directory: Arc<M>) -> Self {
        Self { directory }
    }

    /// Lists the members of a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthorized`] when the actor is not a
    /// member of `workspace_id`, or [`BoardServiceError::Membership`] when
    /// the directory fails.
    pub async fn list(
        &self,
        actor: &UserId,
        workspace_id: &WorkspaceId,
    ) -> BoardServiceResult<Vec<Member>> {
        require_member(&*self.directory, workspace_id, actor).await?;
        Ok(self.directory.list_members(workspace_id).await?)
    }

    /// Removes a member and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Forbidden`] when a non-admin removes
    /// someone other than themselves, [`BoardServiceError::SoleMember`] when
    /// the target is the only member, and the lookup errors of
    /// [`MemberService::list`].
    pub async fn remove(&self, actor: &UserId, id: &MemberId) -> BoardServiceResult<MemberId> {
        let target = self.load(id).await?;
        let acting = require_member(&*self.directory, &target.workspace_id, actor).await?;
        if acting.id != target.id && !acting.is_admin() {
            return Err(forbidden(&target, actor));
        }
        self.ensure_not_sole(&target.workspace_id).await?;

        self.directory.remove(&target.id).await?;
        info!(member_id = %target.id, workspace_id = %target.workspace_id, "removed member");
        Ok(target.id)
    }

    /// Changes the role of a member.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Forbidden`] when the actor is not an
    /// admin, [`BoardServiceError::SoleMember`] when the target is the only
    /// member, and the lookup errors of [`MemberService::list`].
    pub async fn change_role(
        &self,
        actor: &UserId,
        id: &MemberId,
        role: MemberRole,
    ) -> BoardServiceResult<Member> {
        let target = self.load(id).await?;
        let acting = require_member(&*self.directory, &target.workspace_id, actor).await?;
        if !acting.is_admin() {
            return Err(forbidden(&target, actor));
        }
        self.ensure_not_sole(&target.workspace_id).await?;

        let updated = self.directory.update_role(&target.id, role).await?;
        info!(member_id = %updated.id, role = ?updated.role, "changed member role");
        Ok(updated)
    }

    async fn load(&self, id: &MemberId) -> BoardServiceResult<Member> {
        self.directory
            .find_by_id(id)
            .await?
            .ok_or_else(|| BoardServiceError::MemberNotFound(id.clone()))
    }

    async fn ensure_not_sole(&self, workspace_id: &WorkspaceId) -> BoardServiceResult<()> {
        let members = self.directory.list_members(workspace_id).await?;
        if members.len() <= 1 {
            return Err(BoardServiceError::SoleMember(workspace_id.clone()));
        }
        Ok(())
    }
}

fn forbidden(target: &Member, actor: &UserId) -> BoardServiceError {
    warn!(member_id = %target.id, user_id = %actor, "rejected member management");
    BoardServiceError::Forbidden {
        member_id: target.id.clone(),
        user_id: actor.clone(),
    }
}
