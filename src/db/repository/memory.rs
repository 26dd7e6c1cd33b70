use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepoError, RepoResult, TodoRepository};
use crate::db::Todo;

/// Process-local [`TodoRepository`]. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    inner: RwLock<MemoryStore>,
}

#[derive(Debug, Default)]
struct MemoryStore {
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> RepoResult<Vec<Todo>> {
        let store = self.inner.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Todo>> {
        let store = self.inner.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> RepoResult<Vec<Todo>> {
        let wanted: BTreeSet<i64> = ids.iter().copied().collect();
        let store = self.inner.read().await;
        Ok(wanted
            .into_iter()
            .filter_map(|id| store.rows.get(&id).cloned())
            .collect())
    }

    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Todo>> {
        let store = self.inner.read().await;
        Ok(store
            .rows
            .values()
            .filter(|todo| todo.category == category)
            .cloned()
            .collect())
    }

    async fn save(&self, mut todo: Todo) -> RepoResult<Todo> {
        let mut store = self.inner.write().await;
        if todo.id == 0 {
            store.last_id += 1;
            todo.id = store.last_id;
        } else if !store.rows.contains_key(&todo.id) {
            return Err(RepoError::RecordNotUpdated { id: todo.id });
        }
        store.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }
}
