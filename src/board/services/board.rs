//! Board orchestration: loading, move reconciliation, and write-back.
//!
//! Moves are reconciled synchronously against a caller-owned [`BoardState`]
//! so the board can be redrawn at once. The resulting pending updates are
//! written back afterwards, either awaited via [`BoardService::persist`] or
//! detached via [`BoardService::spawn_persist`]. Write-back never rolls the
//! optimistic board back; callers inspect the [`PersistReport`] and refetch.

use super::{BoardServiceError, BoardServiceResult, access::require_member};
use crate::board::{
    domain::{
        BoardState, DragMove, MoveOutcome, PendingUpdate, PositionPolicy, Task, TaskId, UserId,
        WorkspaceId,
    },
    ports::{MembershipDirectory, TaskFilter, TaskStore},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A pending update that could not be written.
#[derive(Debug, Clone)]
pub struct PersistFailure {
    /// Task the update targeted.
    pub id: TaskId,
    /// Why the write failed.
    pub error: BoardServiceError,
}

/// Per-update outcome of writing back a move.
#[derive(Debug, Clone, Default)]
pub struct PersistReport {
    /// Tasks whose placement was written.
    pub applied: Vec<TaskId>,
    /// Updates that were not written.
    pub failed: Vec<PersistFailure>,
}

impl PersistReport {
    /// Returns `true` when every update was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Kanban board service gated by workspace membership.
pub struct BoardService<S, M, C>
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

impl<S, M, C> Clone for BoardService<S, M, C>
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

impl<S, M, C> BoardService<S, M, C>
where
    S: TaskStore,
    M: MembershipDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a board service with the default position policy.
    #[must_use]
    pub fn new(store: Arc<S>, membership: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            store,
            membership,
            clock,
            policy: PositionPolicy::default(),
        }
    }

    /// Replaces the position policy used when renumbering columns.
    #[must_use]
    pub const fn with_policy(mut self, policy: PositionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active position policy.
    #[must_use]
    pub const fn policy(&self) -> &PositionPolicy {
        &self.policy
    }

    /// Loads the tasks matching `filter` and projects them into a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthorized`] when the actor is not a
    /// member of the filtered workspace, or [`BoardServiceError::Store`] when
    /// listing fails.
    pub async fn load_board(
        &self,
        actor: &UserId,
        filter: &TaskFilter,
    ) -> BoardServiceResult<BoardState> {
        require_member(&*self.membership, filter.workspace_id(), actor).await?;
        let tasks = self.store.list(filter).await?;
        Ok(BoardState::project(tasks.iter().map(Task::card)))
    }

    /// Reconciles a move against `state` without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Move`] when the move does not fit
    /// `state`. The caller keeps its current board in that case.
    pub fn move_card(
        &self,
        state: &BoardState,
        movement: DragMove,
    ) -> BoardServiceResult<MoveOutcome> {
        state.reconcile_move(movement, &self.policy).map_err(|err| {
            warn!(error = %err, ?movement, "discarding board move");
            BoardServiceError::from(err)
        })
    }

    /// Writes pending updates back to the store, one independent write per
    /// update.
    ///
    /// Individual failures are collected in the report rather than aborting
    /// the batch; earlier writes are not undone.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthorized`] when the actor is not a
    /// member of `workspace_id`, or [`BoardServiceError::Membership`] when
    /// the lookup fails. Per-update failures are reported, not returned.
    pub async fn persist(
        &self,
        actor: &UserId,
        workspace_id: &WorkspaceId,
        updates: &[PendingUpdate],
    ) -> BoardServiceResult<PersistReport> {
        require_member(&*self.membership, workspace_id, actor).await?;

        let mut report = PersistReport::default();
        for update in updates {
            match self.write_update(workspace_id, update).await {
                Ok(()) => report.applied.push(update.id.clone()),
                Err(error) => {
                    warn!(task_id = %update.id, error = %error, "board update not persisted");
                    report.failed.push(PersistFailure {
                        id: update.id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            workspace_id = %workspace_id,
            applied = report.applied.len(),
            failed = report.failed.len(),
            "persisted board updates"
        );
        Ok(report)
    }

    /// Detaches [`BoardService::persist`] onto the tokio runtime and returns
    /// its handle.
    ///
    /// Batches spawned for successive moves are independent and may complete
    /// in any order.
    pub fn spawn_persist(
        &self,
        actor: UserId,
        workspace_id: WorkspaceId,
        updates: Vec<PendingUpdate>,
    ) -> JoinHandle<BoardServiceResult<PersistReport>>
    where
        S: 'static,
        M: 'static,
        C: 'static,
    {
        let service = self.clone();
        debug!(updates = updates.len(), "spawning board write-back");
        tokio::spawn(async move { service.persist(&actor, &workspace_id, &updates).await })
    }

    async fn write_update(
        &self,
        workspace_id: &WorkspaceId,
        update: &PendingUpdate,
    ) -> BoardServiceResult<()> {
        let mut task = self
            .store
            .find_by_id(&update.id)
            .await?
            .ok_or_else(|| BoardServiceError::NotFound(update.id.clone()))?;
        if task.workspace_id() != workspace_id {
            return Err(BoardServiceError::ForeignTask {
                task_id: update.id.clone(),
                workspace_id: workspace_id.clone(),
            });
        }
        task.place(update.status, update.position, &*self.clock);
        self.store.update(&task).await?;
        Ok(())
    }
}
