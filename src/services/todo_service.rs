use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    db::repository::{RepoError, TodoRepository},
    mappers::todo_mapper,
    models::TodoView,
};

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("Todo not found with ID: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Repository(#[from] RepoError),
}

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_todos(&self) -> Result<Vec<TodoView>, TodoError> {
        let todos = self.repo.find_all().await?;
        debug!(count = todos.len(), "listed todos");
        Ok(todo_mapper::to_views(&todos))
    }

    pub async fn get_todo_by_id(&self, id: i64) -> Result<TodoView, TodoError> {
        let todo = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))?;
        Ok(todo_mapper::to_view(&todo))
    }

    /// Persists a new todo. Any `id` or `done` on the payload is discarded so
    /// a create can never overwrite an existing record.
    pub async fn create_todo(&self, view: TodoView) -> Result<TodoView, TodoError> {
        let mut todo = todo_mapper::to_entity(view);
        todo.id = 0;
        todo.done = false;

        let saved = self.repo.save(todo).await?;
        info!(id = saved.id, category = %saved.category, "created todo");
        Ok(todo_mapper::to_view(&saved))
    }

    /// Marks every stored todo in `ids` as done. Ids with no stored record
    /// are skipped without error.
    pub async fn mark_todos_as_done(&self, ids: &[i64]) -> Result<Vec<TodoView>, TodoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let todos = self
            .repo
            .find_all_by_id(ids)
            .await?
            .into_iter()
            .map(|mut todo| {
                todo.done = true;
                todo
            })
            .collect::<Vec<_>>();

        let saved = self.repo.save_all(todos).await?;
        info!(
            requested = ids.len(),
            updated = saved.len(),
            "marked todos as done"
        );
        Ok(todo_mapper::to_views(&saved))
    }

    pub async fn get_todos_by_category(&self, category: &str) -> Result<Vec<TodoView>, TodoError> {
        let todos = self.repo.find_by_category(category).await?;
        debug!(category, count = todos.len(), "listed todos by category");
        Ok(todo_mapper::to_views(&todos))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{TodoError, TodoService};
    use crate::db::repository::{InMemoryTodoRepository, TodoRepository};
    use crate::models::TodoView;

    fn view(title: &str, category: &str, description: Option<&str>) -> TodoView {
        TodoView {
            id: 0,
            title: title.to_string(),
            category: category.to_string(),
            description: description.map(str::to_string),
            done: false,
        }
    }

    fn service() -> (TodoService, Arc<InMemoryTodoRepository>) {
        let repo = Arc::new(InMemoryTodoRepository::new());
        (TodoService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let (service, _) = service();

        let first = service
            .create_todo(view("Todo 1", "Work", Some("Description 1")))
            .await
            .unwrap();
        let second = service
            .create_todo(view("Todo 2", "Home", None))
            .await
            .unwrap();

        assert_eq!(
            first,
            TodoView {
                id: 1,
                title: "Todo 1".to_string(),
                category: "Work".to_string(),
                description: Some("Description 1".to_string()),
                done: false,
            }
        );
        assert_ne!(second.id, 0);
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn create_ignores_caller_supplied_id_and_done() {
        let (service, _) = service();
        let original = service
            .create_todo(view("Original", "Work", None))
            .await
            .unwrap();

        let created = service
            .create_todo(TodoView {
                id: original.id,
                done: true,
                ..view("Intruder", "Work", None)
            })
            .await
            .unwrap();

        assert_ne!(created.id, original.id);
        assert!(!created.done);
        assert_eq!(
            service.get_todo_by_id(original.id).await.unwrap().title,
            "Original"
        );
    }

    #[tokio::test]
    async fn get_by_id_returns_the_created_view() {
        let (service, _) = service();
        let created = service
            .create_todo(view("Todo 1", "Work", Some("Description 1")))
            .await
            .unwrap();

        let fetched = service.get_todo_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_by_id_reports_the_missing_id() {
        let (service, _) = service();

        let err = service.get_todo_by_id(1).await.unwrap_err();

        assert!(matches!(err, TodoError::NotFound(1)));
        assert_eq!(err.to_string(), "Todo not found with ID: 1");
    }

    #[tokio::test]
    async fn mark_as_done_updates_existing_and_skips_unknown_ids() {
        let (service, repo) = service();
        let first = service
            .create_todo(view("Test Todo", "Work", Some("Test description")))
            .await
            .unwrap();
        let untouched = service
            .create_todo(view("Test Todo 2", "Work", None))
            .await
            .unwrap();
        let third = service
            .create_todo(view("Another Todo", "Personal", Some("Another description")))
            .await
            .unwrap();

        let updated = service
            .mark_todos_as_done(&[first.id, third.id, 404])
            .await
            .unwrap();

        assert_eq!(
            updated,
            vec![
                TodoView {
                    done: true,
                    ..first
                },
                TodoView {
                    done: true,
                    ..third
                },
            ]
        );
        let stored = repo.find_by_id(untouched.id).await.unwrap().unwrap();
        assert!(!stored.done);
    }

    #[tokio::test]
    async fn mark_as_done_with_no_ids_is_empty() {
        let (service, _) = service();

        assert!(service.mark_todos_as_done(&[]).await.unwrap().is_empty());
        assert!(service.mark_todos_as_done(&[1, 2]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_filter_matches_the_subset_of_all_todos() {
        let (service, _) = service();
        for (title, category) in [
            ("Work Todo 1", "Work"),
            ("Work Todo 2", "Work"),
            ("School Todo", "School"),
        ] {
            service
                .create_todo(view(title, category, None))
                .await
                .unwrap();
        }

        let work = service.get_todos_by_category("Work").await.unwrap();
        let expected: Vec<TodoView> = service
            .get_all_todos()
            .await
            .unwrap()
            .into_iter()
            .filter(|todo| todo.category == "Work")
            .collect();

        assert_eq!(work.len(), 2);
        assert_eq!(work, expected);
        assert!(
            service
                .get_todos_by_category("Gardening")
                .await
                .unwrap()
                .is_empty()
        );
    }
}
