use crate::config::ConfigError;
use crate::presentation::GlossaryError;
use crate::schemes::{CatalogError, SchemeServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Glossary(GlossaryError),
    Schemes(SchemeServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Glossary(err) => write!(f, "translation error: {}", err),
            AppError::Schemes(err) => write!(f, "scheme lookup error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Glossary(err) => Some(err),
            AppError::Schemes(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Schemes(SchemeServiceError::Profile(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Schemes(SchemeServiceError::UnknownScheme(_)) => StatusCode::NOT_FOUND,
            AppError::Schemes(SchemeServiceError::Briefing(_)) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(_)
            | AppError::Glossary(_)
            | AppError::Schemes(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<GlossaryError> for AppError {
    fn from(value: GlossaryError) -> Self {
        Self::Glossary(value)
    }
}

impl From<SchemeServiceError> for AppError {
    fn from(value: SchemeServiceError) -> Self {
        Self::Schemes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::BriefingError;
    use crate::schemes::VocabularyError;

    #[test]
    fn profile_errors_map_to_unprocessable() {
        let error = AppError::from(SchemeServiceError::Profile(VocabularyError::Unrecognized {
            field: "gender",
            value: "M".to_string(),
        }));
        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error = AppError::from(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        )));
        assert!(error.to_string().starts_with("catalog error: failed to read"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn briefing_backend_errors_map_to_bad_gateway() {
        let error = AppError::from(SchemeServiceError::Briefing(BriefingError::Unavailable(
            "timeout".to_string(),
        )));
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);

        let error = AppError::from(SchemeServiceError::UnknownScheme("Missing".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }
}
