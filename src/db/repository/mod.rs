//! Persistence seam for todos.
//!
//! [`TodoRepository`] is implemented by [`SeaOrmTodoRepository`] for a real
//! SQL store and by [`InMemoryTodoRepository`] for tests and database-less
//! runs. Both order multi-record reads by ascending id.

mod error;
mod memory;
mod store;

use async_trait::async_trait;

pub use error::{RepoError, RepoResult};
pub use memory::InMemoryTodoRepository;
pub use store::SeaOrmTodoRepository;

use super::Todo;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Todo>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Todo>>;

    /// Records whose id appears in `ids`. Unknown ids are skipped and each
    /// record is returned once even if its id is repeated.
    async fn find_all_by_id(&self, ids: &[i64]) -> RepoResult<Vec<Todo>>;

    /// Exact, case-sensitive match on `category`.
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Todo>>;

    /// Inserts when `todo.id == 0` (the store assigns the id), otherwise
    /// overwrites the record with that id.
    async fn save(&self, todo: Todo) -> RepoResult<Todo>;

    /// `save` applied in order. Not atomic: a failure leaves earlier
    /// elements persisted.
    async fn save_all(&self, todos: Vec<Todo>) -> RepoResult<Vec<Todo>> {
        let mut saved = Vec::with_capacity(todos.len());
        for todo in todos {
            saved.push(self.save(todo).await?);
        }
        Ok(saved)
    }
}
