use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::interest::InterestRequest;
use super::ledger::FeeSchedule;
use super::repository::{OutlineDraft, OutlineId, OutlineRepository, RepositoryError};
use super::service::{DraftingService, DraftingServiceError};
use super::templates::{DocumentKind, DocumentRequest, FreeFormContractRequest};

/// Router builder exposing rendering, export, calculators and outline editing.
pub fn drafting_router<R>(service: Arc<DraftingService<R>>) -> Router
where
    R: OutlineRepository + 'static,
{
    Router::new()
        .route("/api/v1/documents/render", post(render_handler::<R>))
        .route("/api/v1/documents/export", post(export_handler::<R>))
        .route("/api/v1/interest", post(interest_handler::<R>))
        .route("/api/v1/ledger", post(ledger_handler::<R>))
        .route("/api/v1/outlines", post(create_outline_handler::<R>))
        .route(
            "/api/v1/outlines/:outline_id",
            get(outline_handler::<R>).delete(discard_outline_handler::<R>),
        )
        .route(
            "/api/v1/outlines/:outline_id/sections",
            post(add_section_handler::<R>),
        )
        .route(
            "/api/v1/outlines/:outline_id/sections/:section",
            put(rename_section_handler::<R>).delete(remove_section_handler::<R>),
        )
        .route(
            "/api/v1/outlines/:outline_id/sections/:section/articles",
            post(add_article_handler::<R>),
        )
        .route(
            "/api/v1/outlines/:outline_id/sections/:section/articles/:article",
            delete(remove_article_handler::<R>),
        )
        .route(
            "/api/v1/outlines/:outline_id/render",
            post(render_outline_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LedgerPayload {
    pub kind: DocumentKind,
    #[serde(default)]
    pub fees: FeeSchedule,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TitlePayload {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticlePayload {
    pub text: String,
}

pub(crate) fn status_for(error: &DraftingServiceError) -> StatusCode {
    match error {
        DraftingServiceError::Validation(_)
        | DraftingServiceError::Interest(_)
        | DraftingServiceError::Ledger(_)
        | DraftingServiceError::Outline(_)
        | DraftingServiceError::NoCostLedger(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DraftingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DraftingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        DraftingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(error: DraftingServiceError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(%error, "drafting request failed");
    }
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

fn draft_response(
    status: StatusCode,
    result: Result<OutlineDraft, DraftingServiceError>,
) -> Response {
    match result {
        Ok(draft) => (status, axum::Json(draft)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn render_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    axum::Json(request): axum::Json<DocumentRequest>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    match service.render(request) {
        Ok(rendered) => (StatusCode::OK, axum::Json(rendered)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    axum::Json(request): axum::Json<DocumentRequest>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    match service.export(request) {
        Ok(document) => {
            let headers = [
                (header::CONTENT_TYPE, document.mime.to_string()),
                (header::CONTENT_DISPOSITION, document.content_disposition()),
            ];
            (StatusCode::OK, headers, document.into_bytes()).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn interest_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    axum::Json(request): axum::Json<InterestRequest>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    match service.interest(&request) {
        Ok(assessment) => {
            let summary = assessment.summary();
            let mut payload = json!(assessment);
            payload["summary"] = json!(summary);
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn ledger_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    axum::Json(payload): axum::Json<LedgerPayload>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    match service.ledger(payload.kind, &payload.fees) {
        Ok(quote) => {
            let markup = quote.ledger.render();
            let mut body = json!(quote);
            body["markup"] = json!(markup);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_outline_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(StatusCode::CREATED, service.create_outline())
}

pub(crate) async fn outline_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path(outline_id): Path<String>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(StatusCode::OK, service.outline(&OutlineId(outline_id)))
}

pub(crate) async fn discard_outline_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path(outline_id): Path<String>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    match service.discard_outline(&OutlineId(outline_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_section_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path(outline_id): Path<String>,
    axum::Json(payload): axum::Json<TitlePayload>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(
        StatusCode::OK,
        service.add_section(&OutlineId(outline_id), payload.title),
    )
}

pub(crate) async fn rename_section_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path((outline_id, section)): Path<(String, usize)>,
    axum::Json(payload): axum::Json<TitlePayload>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(
        StatusCode::OK,
        service.rename_section(&OutlineId(outline_id), section, payload.title),
    )
}

pub(crate) async fn remove_section_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path((outline_id, section)): Path<(String, usize)>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(
        StatusCode::OK,
        service.remove_section(&OutlineId(outline_id), section),
    )
}

pub(crate) async fn add_article_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path((outline_id, section)): Path<(String, usize)>,
    axum::Json(payload): axum::Json<ArticlePayload>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(
        StatusCode::OK,
        service.add_article(&OutlineId(outline_id), section, payload.text),
    )
}

pub(crate) async fn remove_article_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path((outline_id, section, article)): Path<(String, usize, usize)>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    draft_response(
        StatusCode::OK,
        service.remove_article(&OutlineId(outline_id), section, article),
    )
}

pub(crate) async fn render_outline_handler<R>(
    State(service): State<Arc<DraftingService<R>>>,
    Path(outline_id): Path<String>,
    axum::Json(request): axum::Json<FreeFormContractRequest>,
) -> Response
where
    R: OutlineRepository + 'static,
{
    match service.render_outline(&OutlineId(outline_id), request) {
        Ok(rendered) => (StatusCode::OK, axum::Json(rendered)).into_response(),
        Err(error) => error_response(error),
    }
}
