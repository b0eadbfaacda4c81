//! Comment Thread Use Cases
//!
//! Both operations go through `find_owned` first, so commenting on or
//! reading the thread of another user's report fails as not-found.

use std::sync::Arc;

use nid::Nanoid;
use uuid::Uuid;

use crate::domain::entity::comment::{Comment, ROLE_USER};
use crate::domain::repository::{CommentRepository, ReportRepository};
use crate::error::{ReportError, ReportResult};

/// Add a comment to an owned report
pub struct AddCommentUseCase<R, C>
where
    R: ReportRepository,
    C: CommentRepository,
{
    report_repo: Arc<R>,
    comment_repo: Arc<C>,
}

impl<R, C> AddCommentUseCase<R, C>
where
    R: ReportRepository,
    C: CommentRepository,
{
    pub fn new(report_repo: Arc<R>, comment_repo: Arc<C>) -> Self {
        Self {
            report_repo,
            comment_repo,
        }
    }

    pub async fn execute(
        &self,
        public_id: &Nanoid,
        owner_id: &Uuid,
        message: String,
    ) -> ReportResult<Comment> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(ReportError::MissingField("message"));
        }

        let report = self
            .report_repo
            .find_owned(public_id, owner_id)
            .await?
            .ok_or(ReportError::NotFound)?;

        let comment = Comment::new(report.report_id, ROLE_USER, message);
        self.comment_repo.create(&comment).await?;

        tracing::debug!(report = %public_id, "Comment added");

        Ok(comment)
    }
}

/// List the comment thread of an owned report
pub struct ListCommentsUseCase<R, C>
where
    R: ReportRepository,
    C: CommentRepository,
{
    report_repo: Arc<R>,
    comment_repo: Arc<C>,
}

impl<R, C> ListCommentsUseCase<R, C>
where
    R: ReportRepository,
    C: CommentRepository,
{
    pub fn new(report_repo: Arc<R>, comment_repo: Arc<C>) -> Self {
        Self {
            report_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, public_id: &Nanoid, owner_id: &Uuid) -> ReportResult<Vec<Comment>> {
        let report = self
            .report_repo
            .find_owned(public_id, owner_id)
            .await?
            .ok_or(ReportError::NotFound)?;

        self.comment_repo.list_for_report(&report.report_id).await
    }
}
