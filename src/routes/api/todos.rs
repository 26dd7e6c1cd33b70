use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::TodoView,
    response::ApiResult,
    services::{ServiceContext, TodoService},
    state::AppState,
};

pub const BASE_PATH: &str = "/todos";

#[derive(Debug, Default, Deserialize)]
pub struct ListTodosQuery {
    pub category: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(BASE_PATH, get(list_todos).post(create_todo))
        .route("/todos/done", post(mark_todos_as_done))
        .route("/todos/{id}", get(get_todo))
        .with_state(state)
}

async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTodosQuery>,
) -> ApiResult<Vec<TodoView>> {
    let service = todo_service_from_state(state.as_ref());
    let todos = match query.category {
        Some(category) => service.get_todos_by_category(&category).await?,
        None => service.get_all_todos().await?,
    };
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<TodoView> {
    let service = todo_service_from_state(state.as_ref());
    Ok(Json(service.get_todo_by_id(id).await?))
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TodoView>,
) -> Result<(StatusCode, Json<TodoView>), AppError> {
    require_text(&body.title, "Title required")?;
    require_text(&body.category, "Category required")?;
    let service = todo_service_from_state(state.as_ref());
    let created = service.create_todo(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn mark_todos_as_done(
    State(state): State<Arc<AppState>>,
    Json(ids): Json<Vec<i64>>,
) -> ApiResult<Vec<TodoView>> {
    let service = todo_service_from_state(state.as_ref());
    Ok(Json(service.mark_todos_as_done(&ids).await?))
}

/// Whitespace-only counts as blank. Accepted values are stored as sent, so
/// the category filter matches them exactly.
fn require_text(value: &str, message: &'static str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(message));
    }
    Ok(())
}

fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}
