//! HTTP handlers for the todo and summarize endpoints.

use std::any::Any;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppError;
use crate::model::{Message, Summary, TextBody, Todo, TodoId};
use crate::store::ListOrder;
use crate::summarizer::build_prompt;
use crate::AppState;

pub const LIVENESS: &str = "Backend is running...";
pub const DELETED: &str = "Todo deleted successfully";

pub async fn root() -> &'static str {
    LIVENESS
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store.list(ListOrder::ById).await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let text = valid_text(body)?;
    let todo = state.store.insert(&text).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = todo_id(id)?;
    let text = valid_text(body)?;
    let todo = state
        .store
        .update(id, &text)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Message>, AppError> {
    let id = todo_id(id)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "todo deleted");
    Ok(Json(Message {
        message: DELETED.to_string(),
    }))
}

pub async fn summarize(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    let todos = state.store.list(ListOrder::ByCreatedAt).await?;
    if todos.is_empty() {
        return Err(AppError::NothingToSummarize);
    }
    let prompt = build_prompt(&todos);
    tracing::debug!(items = todos.len(), "requesting summary");
    let summary = state.summarizer.summarize(&prompt).await?;
    Ok(Json(Summary {
        summary: summary.trim().to_string(),
    }))
}

/// Rendering for a panic caught by the catch-panic layer.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Panic(detail).into_response()
}

/// A body without a JSON content type is treated as an empty body.
fn valid_text(body: Result<Json<TextBody>, JsonRejection>) -> Result<String, AppError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => TextBody::default(),
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };
    body.into_valid_text().ok_or(AppError::Validation)
}

fn todo_id(id: Result<Path<TodoId>, PathRejection>) -> Result<TodoId, AppError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
