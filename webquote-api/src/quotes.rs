use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use webquote_catalog::Selection;
use webquote_engine::{
    build_summary, progress, validate, CostResult, Progress, RequiredFields, TimelineEstimate,
};
use webquote_export::{export_ledger, project};
use webquote_shared::{Masked, PdfRecord, QuotationRecord, QuotationSummary};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/quotes", get(list_quotations).delete(clear_quotations))
        .route("/v1/quotes/latest", get(latest_quotation))
        .route("/v1/quotes/documents", get(list_documents).delete(clear_documents))
        .route("/v1/quotes/estimate", post(estimate))
        .route("/v1/quotes/summary", post(summary))
        .route("/v1/quotes/export/csv", post(export_csv))
        .route("/v1/quotes/export/pdf", post(export_document))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub cost: CostResult,
    pub timeline: TimelineEstimate,
    pub timeline_display: String,
    pub progress: Progress,
}

fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{}\"", file_name)
}

/// Live price while the form is being filled in. Never validates.
pub async fn estimate(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Json<EstimateResponse> {
    let quote = state.engine.quote(&selection);

    Json(EstimateResponse {
        cost: quote.cost,
        timeline: quote.timeline,
        timeline_display: quote.timeline.to_string(),
        progress: progress(&selection),
    })
}

pub async fn summary(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<QuotationSummary>, AppError> {
    validate(&selection, RequiredFields::Quotation).map_err(AppError::missing_fields)?;

    let quote = state.engine.quote(&selection);
    Ok(Json(build_summary(
        &selection,
        state.engine.table(),
        &quote.cost,
        &quote.timeline,
        state.terms,
        Utc::now(),
    )))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<impl IntoResponse, AppError> {
    validate(&selection, RequiredFields::Quotation).map_err(AppError::missing_fields)?;

    let quote = state.engine.quote(&selection);
    let record = project(
        &selection,
        state.engine.table(),
        &quote.cost,
        &quote.timeline,
        Utc::now(),
    );
    info!(
        quotation_id = %record.quotation_id,
        email = %Masked(record.email.as_str()),
        total = record.total_cost_inr,
        "Exporting quotation ledger"
    );

    let export = export_ledger(state.ledger.as_ref(), record).await;

    Ok((
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, attachment(export.file_name)),
        ],
        export.content,
    ))
}

pub async fn export_document(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<impl IntoResponse, AppError> {
    validate(&selection, RequiredFields::Document).map_err(AppError::missing_fields)?;

    let now = Utc::now();
    let quote = state.engine.quote(&selection);
    let summary = build_summary(
        &selection,
        state.engine.table(),
        &quote.cost,
        &quote.timeline,
        state.terms,
        now,
    );
    info!(quotation_id = %summary.quotation_id, "Generating quotation document");

    let artifact = state
        .documents
        .export(&summary, state.ledger.as_ref(), now)
        .await
        .map_err(AppError::export)?;

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, attachment(&artifact.file_name)),
            (
                header::HeaderName::from_static("x-page-count"),
                artifact.pages.to_string(),
            ),
        ],
        artifact.bytes,
    ))
}

pub async fn list_quotations(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuotationRecord>>, AppError> {
    Ok(Json(state.ledger.list_quotations().await?))
}

pub async fn latest_quotation(
    State(state): State<AppState>,
) -> Result<Json<QuotationRecord>, AppError> {
    state
        .ledger
        .latest_quotation()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("No quotation has been exported yet".into()))
}

pub async fn clear_quotations(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.ledger.clear_quotations().await?;
    info!("Quotation ledger cleared");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<PdfRecord>>, AppError> {
    Ok(Json(state.ledger.list_documents().await?))
}

pub async fn clear_documents(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.ledger.clear_documents().await?;
    info!("Document history cleared");
    Ok(StatusCode::NO_CONTENT)
}
