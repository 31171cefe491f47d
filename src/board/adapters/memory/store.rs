//! In-memory task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Position, Task, TaskId, TaskStatus, WorkspaceId},
    ports::{TaskFilter, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn store(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id().clone()));
        }
        state.insertion_order.push(task.id().clone());
        state.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn list(&self, filter: &TaskFilter) -> TaskStoreResult<Vec<Task>> {
        let state = self.read()?;
        // Newest insertions first, so equal creation timestamps still list
        // most recent first after the stable sort.
        let mut tasks: Vec<Task> = state
            .insertion_order
            .iter()
            .rev()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        tasks.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(tasks)
    }

    async fn highest_position(
        &self,
        workspace_id: &WorkspaceId,
        status: TaskStatus,
    ) -> TaskStoreResult<Option<Position>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.workspace_id() == workspace_id && task.status() == status)
            .map(Task::position)
            .max())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let existing = state
            .tasks
            .get_mut(task.id())
            .ok_or_else(|| TaskStoreError::NotFound(task.id().clone()))?;
        *existing = task.clone();
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        if state.tasks.remove(id).is_none() {
            return Err(TaskStoreError::NotFound(id.clone()));
        }
        state.insertion_order.retain(|existing| existing != id);
        Ok(())
    }
}
