//! In-memory workspace membership directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Member, MemberId, MemberRole, UserId, WorkspaceId},
    ports::{MembershipDirectory, MembershipError, MembershipResult},
};

type MemberMap = HashMap<(WorkspaceId, UserId), Member>;

/// Thread-safe in-memory membership directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipDirectory {
    members: Arc<RwLock<MemberMap>>,
}

impl InMemoryMembershipDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a membership, replacing any previous one for the same
    /// workspace and user.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::Backend`] when the directory lock is
    /// poisoned.
    pub fn add(&self, member: Member) -> MembershipResult<()> {
        let mut members = self.write()?;
        members.insert(
            (member.workspace_id.clone(), member.user_id.clone()),
            member,
        );
        Ok(())
    }

    fn read(&self) -> MembershipResult<RwLockReadGuard<'_, MemberMap>> {
        self.members
            .read()
            .map_err(|err| MembershipError::backend(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> MembershipResult<RwLockWriteGuard<'_, MemberMap>> {
        self.members
            .write()
            .map_err(|err| MembershipError::backend(std::io::Error::other(err.to_string())))
    }
}

fn key_of(members: &MemberMap, id: &MemberId) -> Option<(WorkspaceId, UserId)> {
    members
        .iter()
        .find(|(_, member)| &member.id == id)
        .map(|(key, _)| key.clone())
}

#[async_trait]
impl MembershipDirectory for InMemoryMembershipDirectory {
    async fn find_member(
        &self,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
    ) -> MembershipResult<Option<Member>> {
        let members = self.read()?;
        Ok(members
            .get(&(workspace_id.clone(), user_id.clone()))
            .cloned())
    }

    async fn find_by_id(&self, id: &MemberId) -> MembershipResult<Option<Member>> {
        let members = self.read()?;
        Ok(members.values().find(|member| &member.id == id).cloned())
    }

    async fn list_members(&self, workspace_id: &WorkspaceId) -> MembershipResult<Vec<Member>> {
        let members = self.read()?;
        let mut listed: Vec<Member> = members
            .values()
            .filter(|member| &member.workspace_id == workspace_id)
            .cloned()
            .collect();
        listed.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(listed)
    }

    async fn remove(&self, id: &MemberId) -> MembershipResult<()> {
        let mut members = self.write()?;
        let key = key_of(&members, id).ok_or_else(|| MembershipError::NotFound(id.clone()))?;
        members.remove(&key);
        Ok(())
    }

    async fn update_role(&self, id: &MemberId, role: MemberRole) -> MembershipResult<Member> {
        let mut members = self.write()?;
        let key = key_of(&members, id).ok_or_else(|| MembershipError::NotFound(id.clone()))?;
        let member = members
            .get_mut(&key)
            .ok_or_else(|| MembershipError::NotFound(id.clone()))?;
        member.role = role;
        Ok(member.clone())
    }
}
