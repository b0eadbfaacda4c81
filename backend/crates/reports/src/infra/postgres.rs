//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use kernel::id::{CommentId, ReportId};

use crate::domain::entity::{comment::Comment, report::Report};
use crate::domain::repository::{CommentRepository, ReportRepository};
use crate::error::{ReportError, ReportResult};

/// PostgreSQL-backed reports repository
#[derive(Clone)]
pub struct PgReportsRepository {
    pool: PgPool,
}

impl PgReportsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Report Repository Implementation
// ============================================================================

impl ReportRepository for PgReportsRepository {
    async fn create(&self, report: &Report) -> ReportResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reports (
                report_id,
                public_id,
                owner_id,
                chain_ref,
                tx_hash,
                status,
                seen,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(report.report_id.as_uuid())
        .bind(report.public_id.as_str())
        .bind(report.owner_id)
        .bind(&report.chain_ref)
        .bind(&report.tx_hash)
        .bind(&report.status)
        .bind(report.seen)
        .bind(report.created_at)
        .bind(report.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_owned(
        &self,
        public_id: &Nanoid,
        owner_id: &Uuid,
    ) -> ReportResult<Option<Report>> {
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT
                report_id,
                public_id,
                owner_id,
                chain_ref,
                tx_hash,
                status,
                seen,
                created_at,
                updated_at
            FROM reports
            WHERE public_id = $1 AND owner_id = $2
            "#,
        )
        .bind(public_id.as_str())
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_report()).transpose()
    }

    async fn list_for_owner(&self, owner_id: &Uuid) -> ReportResult<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT
                report_id,
                public_id,
                owner_id,
                chain_ref,
                tx_hash,
                status,
                seen,
                created_at,
                updated_at
            FROM reports
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_report()).collect()
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgReportsRepository {
    async fn create(&self, comment: &Comment) -> ReportResult<()> {
        sqlx::query(
            r#"
            INSERT INTO report_comments (
                comment_id,
                report_id,
                role,
                message,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.report_id.as_uuid())
        .bind(&comment.role)
        .bind(&comment.message)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_report(&self, report_id: &ReportId) -> ReportResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comment_id,
                report_id,
                role,
                message,
                created_at
            FROM report_comments
            WHERE report_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(report_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ReportRow {
    report_id: Uuid,
    public_id: String,
    owner_id: Uuid,
    chain_ref: String,
    tx_hash: String,
    status: String,
    seen: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReportRow {
    fn into_report(self) -> ReportResult<Report> {
        let public_id = Nanoid::from_str(&self.public_id)
            .map_err(|e| ReportError::Internal(format!("Invalid public_id: {}", e)))?;

        Ok(Report {
            report_id: ReportId::from_uuid(self.report_id),
            public_id,
            owner_id: self.owner_id,
            chain_ref: self.chain_ref,
            tx_hash: self.tx_hash,
            status: self.status,
            seen: self.seen,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    report_id: Uuid,
    role: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            report_id: ReportId::from_uuid(self.report_id),
            role: self.role,
            message: self.message,
            created_at: self.created_at,
        }
    }
}
