use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};

use crate::error::{AppError, ErrorKind};
use crate::models::ErrorResponse;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Internal details stay in the log.
        let message = match self.kind() {
            ErrorKind::Internal => {
                tracing::error!("Internal error: {}", self);
                "something went wrong".to_string()
            }
            _ => self.message().to_string(),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().as_str().to_string(),
            message,
            status_code: status.as_u16(),
            errors: self.properties().clone(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    AppError::wrap(ErrorKind::InvalidArgument, err.to_string(), "invalid request body").into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    req: &HttpRequest,
) -> error::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    AppError::wrap(ErrorKind::InvalidArgument, err.to_string(), "invalid query parameters").into()
}

/// Handle malformed path segments, e.g. a dog id that is not a UUID
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> error::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    AppError::wrap(ErrorKind::InvalidArgument, err.to_string(), "invalid path parameter").into()
}
