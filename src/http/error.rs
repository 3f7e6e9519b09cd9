//! Error responses.
//!
//! Every failure the API reports is rendered as `{ "ok": false, "error": ... }`
//! with a fixed Spanish message, except body rejections raised by axum
//! itself (e.g. 413), which keep axum's own response.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `titulo` missing, not a string, or blank after trimming.
    #[error("El campo \"titulo\" es obligatorio")]
    InvalidTitle,

    /// `hecho` rejected under strict validation.
    #[error("El campo \"hecho\" debe ser booleano")]
    InvalidCompletion,

    /// No subject has the requested id.
    #[error("Materia no encontrada")]
    SubjectNotFound,

    /// No route or static file matched.
    #[error("Ruta no encontrada")]
    RouteNotFound,

    /// Body declared as JSON but failed to parse.
    #[error("JSON inválido")]
    MalformedJson,

    /// Body could not be read (too large, connection error).
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidTitle | ApiError::InvalidCompletion | ApiError::MalformedJson => {
                StatusCode::BAD_REQUEST
            }
            ApiError::SubjectNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Body(rejection) = self {
            return rejection.into_response();
        }

        let status = self.status();
        let body = ErrorBody {
            ok: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
