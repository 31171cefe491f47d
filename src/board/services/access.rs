//! Workspace membership guard shared by the services.

use super::{BoardServiceError, BoardServiceResult};
use crate::board::{
    domain::{Member, UserId, WorkspaceId},
    ports::MembershipDirectory,
};
use tracing::warn;

/// Resolves the actor's membership in `workspace_id`.
///
/// # Errors
///
/// Returns [`BoardServiceError::Unauthorized`] when the actor is not a
/// member, or [`BoardServiceError::Membership`] when the lookup fails.
pub(super) async fn require_member<M>(
    directory: &M,
    workspace_id: &WorkspaceId,
    actor: &UserId,
) -> BoardServiceResult<Member>
where
    M: MembershipDirectory + ?Sized,
{
    match directory.find_member(workspace_id, actor).await? {
        Some(member) => Ok(member),
        None => {
            warn!(workspace_id = %workspace_id, user_id = %actor, "rejected non-member access");
            Err(BoardServiceError::Unauthorized {
                workspace_id: workspace_id.clone(),
                user_id: actor.clone(),
            })
        }
    }
}
