//! HTTP handlers for the `/todos` resource.
//!
//! Handlers are thin: decode the request, call the repository, encode the
//! result. Extractor rejections are folded into `ApiError::BadRequest` so every
//! client error carries the same JSON body.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::repository::TodoRepository;
use crate::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Repository handle shared by every request.
pub type SharedRepository = Arc<dyn TodoRepository>;

pub fn routes(repo: SharedRepository) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(repo)
}

fn todo_id(path: Result<Path<TodoId>, PathRejection>) -> Result<TodoId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

#[tracing::instrument(name = "list_todos", skip_all)]
async fn list_todos(State(repo): State<SharedRepository>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = repo.get_all().await?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(Json(todos))
}

#[tracing::instrument(name = "get_todo", skip_all)]
async fn get_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    repo.find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

#[tracing::instrument(name = "create_todo", skip_all)]
async fn create_todo(
    State(repo): State<SharedRepository>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = json_body(body)?;
    let todo = repo.create(input).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[tracing::instrument(name = "update_todo", skip_all)]
async fn update_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    let patch = json_body(body)?;
    let todo = repo.update(id, patch).await?;
    Ok(Json(todo))
}

// Any request body is ignored.
#[tracing::instrument(name = "delete_todo", skip_all)]
async fn delete_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = todo_id(path)?;
    let todo = repo.delete(id).await?;
    tracing::info!(id, "deleted todo");
    Ok(Json(todo))
}
