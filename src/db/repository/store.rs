use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use super::{RepoError, RepoResult, TodoRepository};
use crate::db::Todo;
use crate::db::entities::prelude::Todo as TodoEntity;
use crate::db::entities::todo;

/// Upper bound on bound parameters per `IN (...)` lookup; SQLite caps a
/// statement at 32766 variables and Postgres at 65535.
const ID_CHUNK_SIZE: usize = 1_000;

/// [`TodoRepository`] over a sea-orm connection.
#[derive(Clone)]
pub struct SeaOrmTodoRepository {
    db: DatabaseConnection,
}

impl SeaOrmTodoRepository {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    async fn insert(&self, todo: Todo) -> RepoResult<Todo> {
        let model = todo::ActiveModel {
            title: Set(todo.title),
            category: Set(todo.category),
            description: Set(todo.description),
            done: Set(todo.done),
            ..Default::default()
        };
        model.insert(&self.db).await.map_err(RepoError::Db)
    }

    async fn update(&self, todo: Todo) -> RepoResult<Todo> {
        let id = todo.id;
        let model = todo::ActiveModel {
            id: Unchanged(id),
            title: Set(todo.title),
            category: Set(todo.category),
            description: Set(todo.description),
            done: Set(todo.done),
        };
        model.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => RepoError::RecordNotUpdated { id },
            other => RepoError::Db(other),
        })
    }
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn find_all(&self) -> RepoResult<Vec<Todo>> {
        TodoEntity::find()
            .order_by_asc(todo::Column::Id)
            .all(&self.db)
            .await
            .map_err(RepoError::Db)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Todo>> {
        TodoEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(RepoError::Db)
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> RepoResult<Vec<Todo>> {
        // Sorted and deduplicated, so chunk results concatenate in id order.
        let ids: Vec<i64> = ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let mut found = Vec::new();
        for chunk in ids.chunks(ID_CHUNK_SIZE) {
            let mut rows = TodoEntity::find()
                .filter(todo::Column::Id.is_in(chunk.iter().copied()))
                .order_by_asc(todo::Column::Id)
                .all(&self.db)
                .await
                .map_err(RepoError::Db)?;
            found.append(&mut rows);
        }
        Ok(found)
    }

    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Todo>> {
        TodoEntity::find()
            .filter(todo::Column::Category.eq(category))
            .order_by_asc(todo::Column::Id)
            .all(&self.db)
            .await
            .map_err(RepoError::Db)
    }

    async fn save(&self, todo: Todo) -> RepoResult<Todo> {
        if todo.id == 0 {
            self.insert(todo).await
        } else {
            self.update(todo).await
        }
    }
}
