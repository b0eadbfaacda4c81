//! Report Retrieval Use Cases
//!
//! A local report row carries only the chain reference; reads go back to
//! the gateway for the content and merge it with the local metadata.

use std::sync::Arc;

use nid::Nanoid;
use uuid::Uuid;

use crate::domain::entity::report::ReportRecord;
use crate::domain::repository::ReportRepository;
use crate::error::{ReportError, ReportResult};
use crate::gateway::ChainGateway;

/// List the caller's reports, with content fetched from the gateway
pub struct ListReportsUseCase<R, G>
where
    R: ReportRepository,
    G: ChainGateway,
{
    report_repo: Arc<R>,
    gateway: Arc<G>,
}

impl<R, G> ListReportsUseCase<R, G>
where
    R: ReportRepository,
    G: ChainGateway,
{
    pub fn new(report_repo: Arc<R>, gateway: Arc<G>) -> Self {
        Self {
            report_repo,
            gateway,
        }
    }

    pub async fn execute(&self, owner_id: &Uuid) -> ReportResult<Vec<ReportRecord>> {
        let reports = self.report_repo.list_for_owner(owner_id).await?;

        let mut records = Vec::with_capacity(reports.len());
        for report in reports {
            let content = self.gateway.fetch(&report.chain_ref).await?;
            records.push(ReportRecord { report, content });
        }

        Ok(records)
    }
}

/// Fetch a single owned report, with content from the gateway
pub struct GetReportUseCase<R, G>
where
    R: ReportRepository,
    G: ChainGateway,
{
    report_repo: Arc<R>,
    gateway: Arc<G>,
}

impl<R, G> GetReportUseCase<R, G>
where
    R: ReportRepository,
    G: ChainGateway,
{
    pub fn new(report_repo: Arc<R>, gateway: Arc<G>) -> Self {
        Self {
            report_repo,
            gateway,
        }
    }

    pub async fn execute(&self, public_id: &Nanoid, owner_id: &Uuid) -> ReportResult<ReportRecord> {
        let report = self
            .report_repo
            .find_owned(public_id, owner_id)
            .await?
            .ok_or(ReportError::NotFound)?;

        let content = self.gateway.fetch(&report.chain_ref).await?;

        Ok(ReportRecord { report, content })
    }
}

/// Total number of records on chain
pub struct CountReportsUseCase<G>
where
    G: ChainGateway,
{
    gateway: Arc<G>,
}

impl<G> CountReportsUseCase<G>
where
    G: ChainGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> ReportResult<u64> {
        self.gateway.count().await
    }
}
