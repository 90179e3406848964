use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt::Display;

/// Kind of entity a lookup key is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Genre,
    Year,
    Game,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Genre => write!(f, "genre"),
            EntityKind::Year => write!(f, "year"),
            EntityKind::Game => write!(f, "game"),
        }
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Key absent from the relevant table. Distinct from a present key with
    /// an empty result, which is a valid response.
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    /// Key present but the matching rows cannot answer the question
    #[error("no data: {0}")]
    NoData(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            key: key.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::NoData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
