//! Handlers for the ideas CRUD API.
//!
//! Each handler is a stateless pass-through: one repository call plus the
//! commits encode/decode. There are no workflow rules to enforce server-side
//! (any status transition is legal); the client owns that logic.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ideaflow_core::Idea;
use ideaflow_db::models::idea::{CreateIdea, UpdateIdea};
use ideaflow_db::repositories::IdeaRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/ideas
///
/// List every idea, fully decoded, in storage-native order.
pub async fn list_ideas(State(state): State<AppState>) -> AppResult<Json<Vec<Idea>>> {
    let ideas = IdeaRepo::list_all(&state.pool)
        .await
        .map_err(|e| AppError::db("Failed to fetch ideas", e))?;

    Ok(Json(ideas))
}

/// POST /api/ideas
///
/// Create an idea from the client-built draft (text, status, priority and
/// seed commit list) and echo the stored record with its assigned id.
pub async fn create_idea(
    State(state): State<AppState>,
    Json(input): Json<CreateIdea>,
) -> AppResult<impl IntoResponse> {
    if input.text.trim().is_empty() {
        return Err(AppError::Validation("Idea text must not be empty".into()));
    }

    let idea = IdeaRepo::insert(&state.pool, &input)
        .await
        .map_err(|e| AppError::db("Failed to create idea", e))?;

    tracing::info!(idea_id = idea.id, "Idea created");

    Ok((StatusCode::CREATED, Json(idea)))
}

/// PUT /api/ideas/{id}
///
/// Overwrite an idea's status and commit history. A missing id is not
/// distinguished from success: no row matched, no error raised.
pub async fn update_idea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateIdea>,
) -> AppResult<Json<MessageResponse>> {
    IdeaRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| AppError::db("Failed to update idea", e))?;

    tracing::info!(idea_id = id, status = %input.status, "Idea updated");

    Ok(Json(MessageResponse {
        message: "Idea updated successfully",
    }))
}

/// DELETE /api/ideas/{id}
///
/// Hard delete. A missing id is a silent no-op, like update.
pub async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    IdeaRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::db("Failed to delete idea", e))?;

    tracing::info!(idea_id = id, "Idea deleted");

    Ok(Json(MessageResponse {
        message: "Idea deleted successfully",
    }))
}
