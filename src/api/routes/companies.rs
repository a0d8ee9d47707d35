//! Company Routes
//!
//! CRUD endpoints for company records.
//!
//! - GET /api/v1/companies - List all companies
//! - POST /api/v1/companies - Create a company
//! - POST /api/v1/companies/batch - Create several companies
//! - POST /api/v1/companies/import - Import companies from a CSV body
//! - GET /api/v1/companies/:id - Get a company
//! - DELETE /api/v1/companies/:id - Delete a company

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{BatchCreateRequest, BatchCreateResponse, CompanyListResponse, ImportResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::company::{Company, CompanyId, NewCompany};
use crate::import::CsvImporter;

/// GET /api/v1/companies
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CompanyListResponse>> {
    let companies = state.registry.list().await;

    Ok(Json(CompanyListResponse {
        total: companies.len(),
        companies,
    }))
}

/// GET /api/v1/companies/:id
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Company>> {
    let id = parse_id(&id)?;

    state
        .registry
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Company with id {} not found", id)))
}

/// POST /api/v1/companies
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewCompany>,
) -> ApiResult<(StatusCode, Json<Company>)> {
    let company = state.registry.insert(req).await?;

    tracing::info!(
        company_id = %company.id,
        industry = %company.industry,
        status = %company.status,
        "Created company"
    );

    Ok((StatusCode::CREATED, Json(company)))
}

/// POST /api/v1/companies/batch
///
/// All-or-nothing: one invalid entry rejects the whole batch.
pub async fn create_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchCreateRequest>,
) -> ApiResult<(StatusCode, Json<BatchCreateResponse>)> {
    if req.companies.is_empty() {
        return Err(ApiError::Validation("Batch cannot be empty".to_string()));
    }

    let companies = state.registry.insert_batch(req.companies).await?;
    tracing::info!(count = companies.len(), "Created company batch");

    Ok((
        StatusCode::CREATED,
        Json(BatchCreateResponse {
            created: companies.len(),
            companies,
        }),
    ))
}

/// POST /api/v1/companies/import
///
/// Body is CSV text with a header row. Rows without a name are skipped and
/// reported; the remaining rows are added as one batch.
pub async fn import_csv(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<(StatusCode, Json<ImportResponse>)> {
    if body.trim().is_empty() {
        return Err(ApiError::Validation("CSV body cannot be empty".to_string()));
    }

    let result = CsvImporter::new().import_str(&body)?;
    let created = state.registry.insert_batch(result.companies).await?;

    tracing::info!(
        imported = created.len(),
        failed = result.rows_failed,
        "Imported companies from CSV"
    );

    Ok((
        StatusCode::CREATED,
        Json(ImportResponse {
            imported: created.len(),
            rows_processed: result.rows_processed,
            rows_failed: result.rows_failed,
            errors: result.errors,
        }),
    ))
}

/// DELETE /api/v1/companies/:id
pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let removed = state.registry.remove(id).await?;

    tracing::info!(company_id = %removed.id, "Deleted company");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> ApiResult<CompanyId> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("Invalid company id: {}", raw)))
}
