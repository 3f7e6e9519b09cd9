//! Subject endpoints.
//!
//! Each handler takes the registry lock once and keeps it for the whole
//! lookup-validate-mutate sequence. No handler awaits while holding it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::payload::SubjectPayload;
use crate::http::server::AppState;
use crate::registry::{parse_id, Subject};

/// Success envelope for create and update.
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// GET /api/materias
pub async fn list_subjects(State(state): State<AppState>) -> Json<Vec<Subject>> {
    let registry = state.registry.read().await;
    Json(registry.list().to_vec())
}

/// GET /api/materias/{id}
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Subject>, ApiError> {
    let registry = state.registry.read().await;
    parse_id(&id)
        .and_then(|id| registry.get(id))
        .cloned()
        .map(Json)
        .ok_or(ApiError::SubjectNotFound)
}

/// POST /api/materias
pub async fn create_subject(
    State(state): State<AppState>,
    payload: SubjectPayload,
) -> Result<(StatusCode, Json<DataBody<Subject>>), ApiError> {
    let draft = payload.validate(state.completion)?;

    let mut registry = state.registry.write().await;
    let subject = registry.create(draft.title, draft.done.unwrap_or(false));

    tracing::debug!(id = %subject.id, title = %subject.title, "Subject created");
    Ok((StatusCode::CREATED, Json(DataBody::new(subject))))
}

/// PUT /api/materias/{id}
///
/// An unknown id answers 404 before the body is validated.
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: SubjectPayload,
) -> Result<Json<DataBody<Subject>>, ApiError> {
    let mut registry = state.registry.write().await;
    let id = parse_id(&id)
        .filter(|id| registry.contains(*id))
        .ok_or(ApiError::SubjectNotFound)?;

    let draft = payload.validate(state.completion)?;
    let subject = registry
        .update(id, draft.title, draft.done)
        .ok_or(ApiError::SubjectNotFound)?;

    tracing::debug!(id = %subject.id, done = subject.done, "Subject updated");
    Ok(Json(DataBody::new(subject)))
}

/// DELETE /api/materias/{id}
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut registry = state.registry.write().await;
    let removed = parse_id(&id).is_some_and(|id| registry.delete(id));
    if !removed {
        return Err(ApiError::SubjectNotFound);
    }

    tracing::debug!(id = %id, remaining = registry.len(), "Subject deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for anything no route or static file answered.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
