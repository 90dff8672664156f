//! errors.rs
//! Errores tipados del endpoint de eventos.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    /// TaskAttributes ausente, JSON inválido o sin los campos requeridos.
    #[error("TaskAttributes inválido: {0}")]
    MalformedAttributes(String),

    #[error("No se pudo guardar la llamada perdida: {0}")]
    Persistence(#[from] anyhow::Error),
}

impl ResponseError for EventError {
    fn status_code(&self) -> StatusCode {
        match self {
            EventError::MalformedAttributes(_) => StatusCode::BAD_REQUEST,
            EventError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": self.to_string()
        }))
    }
}
