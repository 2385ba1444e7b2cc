use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use webquote_engine::ValidationFailure;
use webquote_export::ExportError;

#[derive(Debug)]
pub enum AppError {
    MissingFields(ValidationFailure),
    NotFoundError(String),
    RenderError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn missing_fields(failure: ValidationFailure) -> Self {
        AppError::MissingFields(failure)
    }

    pub fn export(err: ExportError) -> Self {
        match err {
            ExportError::Render(reason) => AppError::RenderError(reason),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingFields(failure) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": failure.to_string(),
                    "missing": failure.missing,
                }),
            ),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::RenderError(reason) => {
                tracing::error!("Document renderer failed: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": format!("Failed to generate document: {}", reason) }),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
