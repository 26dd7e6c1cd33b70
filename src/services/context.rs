use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    db::repository::{InMemoryTodoRepository, SeaOrmTodoRepository, TodoRepository},
    services::todo_service::TodoService,
    state::AppState,
};

/// Hands out services bound to one shared repository.
#[derive(Clone)]
pub struct ServiceContext {
    todos: Arc<dyn TodoRepository>,
}

impl ServiceContext {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    pub fn from_db(db: &DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmTodoRepository::new(db)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTodoRepository::new()))
    }

    pub fn from_state(state: &AppState) -> Self {
        state.services.clone()
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(Arc::clone(&self.todos))
    }
}
