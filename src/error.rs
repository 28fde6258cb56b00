use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result alias used by every service and store
pub type AppResult<T> = Result<T, AppError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification shared by the core and the API surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    Unauthenticated,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::AlreadyExists => "ALREADY_EXISTS",
            ErrorKind::PermissionDenied => "PERMISSION_DENIED",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified application error
///
/// Carries a kind, a human-readable message, an optional per-field property
/// map (validation failures) and the error it wraps, if any. Displays as
/// `message: source` when wrapping.
#[derive(Debug, Error)]
#[error("{message}{}", .source.as_ref().map(|e| format!(": {e}")).unwrap_or_default())]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    properties: BTreeMap<String, String>,
    #[source]
    source: Option<BoxError>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            properties: BTreeMap::new(),
            source: None,
        }
    }

    /// Wrap an underlying error under the given classification
    pub fn wrap<E>(kind: ErrorKind, source: E, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind,
            message: message.into(),
            properties: BTreeMap::new(),
            source: Some(source.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message without the wrapped source
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let properties = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                (field.to_string(), detail)
            })
            .collect();

        AppError::wrap(ErrorKind::InvalidArgument, errors, "validation error")
            .with_properties(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_without_source() {
        let err = AppError::permission_denied("cannot edit a dog that isn't yours");
        assert_eq!(err.to_string(), "cannot edit a dog that isn't yours");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_wrap_keeps_outer_kind_and_chains_message() {
        let inner = AppError::not_found("dog not found");
        let err = AppError::wrap(ErrorKind::Internal, inner, "getting liker dog error");

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), "getting liker dog error");
        assert_eq!(err.to_string(), "getting liker dog error: dog not found");

        let source = err.source().expect("wrapped source");
        let inner = source.downcast_ref::<AppError>().expect("inner app error");
        assert_eq!(inner.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_properties() {
        let err = AppError::invalid_argument("validation error")
            .with_property("name", "too short")
            .with_property("age", "out of range");

        assert_eq!(err.properties().len(), 2);
        assert_eq!(err.properties()["name"], "too short");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::AlreadyExists.to_string(), "ALREADY_EXISTS");
        assert_eq!(
            serde_json::to_string(&ErrorKind::PermissionDenied).unwrap(),
            "\"PERMISSION_DENIED\""
        );
    }
}
