//! HTTP handlers for report endpoints
//!
//! Every handler runs behind the auth middleware and reads the caller's
//! identity from the injected [`Principal`] extension.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nid::Nanoid;

use kernel::principal::Principal;

use crate::application::{
    AddCommentUseCase, CountReportsUseCase, GetReportUseCase, ListCommentsUseCase,
    ListReportsUseCase, SubmitReportInput, SubmitReportUseCase,
};
use crate::domain::repository::{CommentRepository, ReportRepository};
use crate::error::{ReportError, ReportResult};
use crate::gateway::ChainGateway;
use crate::presentation::dto::{
    AddCommentRequest, AddCommentResponse, CommentDto, CountReportsResponse, GetReportResponse,
    ListCommentsResponse, ListReportsResponse, ReportRecordDto, ReportSummaryDto,
    SubmitReportRequest, SubmitReportResponse,
};

/// Shared state for report handlers
#[derive(Debug)]
pub struct ReportsAppState<R, G> {
    pub repo: Arc<R>,
    pub gateway: Arc<G>,
}

impl<R, G> Clone for ReportsAppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<R, G> ReportsAppState<R, G> {
    pub fn new(repo: R, gateway: G) -> Self {
        Self {
            repo: Arc::new(repo),
            gateway: Arc::new(gateway),
        }
    }
}

/// POST /
pub async fn submit_report<R, G>(
    State(state): State<ReportsAppState<R, G>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<SubmitReportRequest>,
) -> ReportResult<Response>
where
    R: ReportRepository + Send + Sync + 'static,
    G: ChainGateway + Send + Sync + 'static,
{
    let use_case = SubmitReportUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.gateway));
    let report = use_case
        .execute(
            principal.user_id,
            SubmitReportInput {
                victim_name: req.victim_name,
                phone_number: req.phone_number,
                abuse_type: req.abuse_type,
                gender: req.gender,
                age: req.age,
                incident_location: req.incident_location,
                incident_city: req.incident_city,
                incident_state: req.incident_state,
                incident_date: req.incident_date,
                description: req.description,
                evidence: req.evidence,
            },
        )
        .await?;

    let body = SubmitReportResponse {
        success: true,
        message: "Report submitted successfully".to_string(),
        report: ReportSummaryDto::from(&report),
    };

    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// GET /
pub async fn list_reports<R, G>(
    State(state): State<ReportsAppState<R, G>>,
    Extension(principal): Extension<Principal>,
) -> ReportResult<Response>
where
    R: ReportRepository + Send + Sync + 'static,
    G: ChainGateway + Send + Sync + 'static,
{
    let use_case = ListReportsUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.gateway));
    let records = use_case.execute(&principal.user_id).await?;

    let body = ListReportsResponse {
        success: true,
        reports: records.iter().map(ReportRecordDto::from).collect(),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /count
pub async fn count_reports<R, G>(
    State(state): State<ReportsAppState<R, G>>,
) -> ReportResult<Response>
where
    R: Send + Sync + 'static,
    G: ChainGateway + Send + Sync + 'static,
{
    let use_case = CountReportsUseCase::new(Arc::clone(&state.gateway));
    let count = use_case.execute().await?;

    let body = CountReportsResponse {
        success: true,
        count,
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// GET /{public_id}
pub async fn get_report<R, G>(
    State(state): State<ReportsAppState<R, G>>,
    Extension(principal): Extension<Principal>,
    Path(public_id): Path<String>,
) -> ReportResult<Response>
where
    R: ReportRepository + Send + Sync + 'static,
    G: ChainGateway + Send + Sync + 'static,
{
    let public_id = parse_public_id(&public_id)?;

    let use_case = GetReportUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.gateway));
    let record = use_case.execute(&public_id, &principal.user_id).await?;

    let body = GetReportResponse {
        success: true,
        report: ReportRecordDto::from(&record),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// POST /{public_id}/comments
pub async fn add_comment<R, G>(
    State(state): State<ReportsAppState<R, G>>,
    Extension(principal): Extension<Principal>,
    Path(public_id): Path<String>,
    Json(req): Json<AddCommentRequest>,
) -> ReportResult<Response>
where
    R: ReportRepository + CommentRepository + Send + Sync + 'static,
    G: Send + Sync + 'static,
{
    let public_id = parse_public_id(&public_id)?;

    let use_case = AddCommentUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    let comment = use_case
        .execute(&public_id, &principal.user_id, req.message)
        .await?;

    let body = AddCommentResponse {
        success: true,
        message: "Comment added successfully".to_string(),
        comment: CommentDto::from(&comment),
    };

    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// GET /{public_id}/comments
pub async fn list_comments<R, G>(
    State(state): State<ReportsAppState<R, G>>,
    Extension(principal): Extension<Principal>,
    Path(public_id): Path<String>,
) -> ReportResult<Response>
where
    R: ReportRepository + CommentRepository + Send + Sync + 'static,
    G: Send + Sync + 'static,
{
    let public_id = parse_public_id(&public_id)?;

    let use_case = ListCommentsUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    let comments = use_case.execute(&public_id, &principal.user_id).await?;

    let body = ListCommentsResponse {
        success: true,
        comments: comments.iter().map(CommentDto::from).collect(),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

// A path segment that is not a well-formed nanoid cannot name any report.
fn parse_public_id(raw: &str) -> ReportResult<Nanoid> {
    Nanoid::from_str(raw).map_err(|_| ReportError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_public_id_is_not_found() {
        let err = parse_public_id("not a nanoid!").unwrap_err();
        assert!(matches!(err, ReportError::NotFound));
    }

    #[test]
    fn test_well_formed_public_id_parses() {
        let id: Nanoid = Nanoid::new();
        assert!(parse_public_id(&id.to_string()).is_ok());
    }
}
