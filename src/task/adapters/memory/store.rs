//! In-memory store for owner-scoped task tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::task::{
    domain::{Task, TaskFilter, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Records live in a map keyed by task identifier; a per-owner index of
/// identifiers preserves insertion order for listings. Every operation
/// takes the lock once, so ownership checks and the read or write they
/// guard happen atomically within the call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    owner_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Removes a task ID from an owner's index entry, cleaning up the entry if
/// empty.
fn remove_from_index(index: &mut HashMap<UserId, Vec<TaskId>>, task_id: TaskId, owner: UserId) {
    if let Some(ids) = index.get_mut(&owner) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(&owner);
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, task: Task) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        if state.tasks.contains_key(&task.id) {
            return Err(TaskStoreError::DuplicateTask(task.id));
        }

        state.owner_index.entry(task.owner).or_default().push(task.id);
        state.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let task = state
            .tasks
            .get(&id)
            .filter(|task| task.owner == owner)
            .cloned();
        Ok(task)
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
        filter: &TaskFilter,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let tasks = state
            .owner_index
            .get(&owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id))
                    .filter(|task| filter.matches(task))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        if !state.tasks.contains_key(&task.id) {
            return Err(TaskStoreError::NotFound(task.id));
        }

        state.tasks.insert(task.id, task.clone());
        Ok(task.clone())
    }

    async fn delete_for_owner(&self, id: TaskId, owner: UserId) -> TaskStoreResult<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        let owned = state
            .tasks
            .get(&id)
            .is_some_and(|task| task.owner == owner);
        if !owned {
            return Ok(false);
        }

        state.tasks.remove(&id);
        remove_from_index(&mut state.owner_index, id, owner);
        Ok(true)
    }
}
