use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cp2k_xml::ConvertError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("multipart request is missing the 'inputFile' field")]
    MissingInputFile,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("error processing input file: {0}")]
    Convert(#[from] ConvertError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::MissingInputFile => {
                (StatusCode::BAD_REQUEST, "MissingInputFile", self.to_string())
            }
            Self::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "InvalidRequest", self.to_string())
            }
            Self::Convert(ConvertError::SchemaNotFound(_)) => {
                (StatusCode::NOT_FOUND, "SchemaNotFound", self.to_string())
            }
            Self::Convert(ConvertError::InvalidSchemaId(_)) => {
                (StatusCode::BAD_REQUEST, "InvalidSchemaId", self.to_string())
            }
            Self::Convert(ConvertError::Transform(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "TransformFailed",
                self.to_string(),
            ),
            Self::Convert(_) => {
                tracing::error!("schema error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SchemaError",
                    self.to_string(),
                )
            }
            Self::Internal(_) => {
                tracing::error!("internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
