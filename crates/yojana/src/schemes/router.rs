use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use super::catalog::CatalogProvider;
use super::profile::ProfileForm;
use super::service::{SchemeService, SchemeServiceError};
use crate::briefing::BriefingService;
use crate::error::AppError;
use crate::presentation::{Locale, Translator};

/// Body shared by the eligibility and briefing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub profile: ProfileForm,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

/// Router builder exposing matching, briefing and form-option endpoints.
pub fn scheme_router<P, T, B>(service: Arc<SchemeService<P, T, B>>) -> Router
where
    P: CatalogProvider + 'static,
    T: Translator + ?Sized + 'static,
    B: BriefingService + 'static,
{
    Router::new()
        .route("/api/v1/schemes/eligible", post(eligible_handler::<P, T, B>))
        .route(
            "/api/v1/schemes/:scheme_name/briefing",
            post(briefing_handler::<P, T, B>),
        )
        .route("/api/v1/form/options", get(form_options_handler::<P, T, B>))
        .with_state(service)
}

pub(crate) async fn eligible_handler<P, T, B>(
    State(service): State<Arc<SchemeService<P, T, B>>>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response
where
    P: CatalogProvider + 'static,
    T: Translator + ?Sized + 'static,
    B: BriefingService + 'static,
{
    let locale = Locale::from_optional(request.lang.as_deref());
    match service.eligible(request.profile, &locale) {
        Ok(presented) => (StatusCode::OK, axum::Json(presented)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn briefing_handler<P, T, B>(
    State(service): State<Arc<SchemeService<P, T, B>>>,
    Path(scheme_name): Path<String>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response
where
    P: CatalogProvider + 'static,
    T: Translator + ?Sized + 'static,
    B: BriefingService + 'static,
{
    let locale = Locale::from_optional(request.lang.as_deref());
    match service.briefing(&scheme_name, request.profile, &locale) {
        Ok(briefing) => (StatusCode::OK, axum::Json(briefing)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn form_options_handler<P, T, B>(
    State(service): State<Arc<SchemeService<P, T, B>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    P: CatalogProvider + 'static,
    T: Translator + ?Sized + 'static,
    B: BriefingService + 'static,
{
    let locale = Locale::from_optional(query.lang.as_deref());
    (StatusCode::OK, axum::Json(service.form_options(&locale))).into_response()
}

fn error_response(error: SchemeServiceError) -> Response {
    AppError::from(error).into_response()
}
