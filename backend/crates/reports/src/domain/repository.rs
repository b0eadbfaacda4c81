//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use nid::Nanoid;
use uuid::Uuid;

use kernel::id::ReportId;

use crate::domain::entity::{comment::Comment, report::Report};
use crate::error::ReportResult;

/// Report repository trait
///
/// Ownership is enforced here, not in handlers: a report only comes back
/// from `find_owned` when the owner matches, so a foreign report id reads
/// the same as a missing one.
#[trait_variant::make(ReportRepository: Send)]
pub trait LocalReportRepository {
    /// Persist a new report row
    async fn create(&self, report: &Report) -> ReportResult<()>;

    /// Find a report by public id, restricted to the given owner
    async fn find_owned(&self, public_id: &Nanoid, owner_id: &Uuid)
    -> ReportResult<Option<Report>>;

    /// List all reports belonging to the owner, newest first
    async fn list_for_owner(&self, owner_id: &Uuid) -> ReportResult<Vec<Report>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Persist a new comment
    async fn create(&self, comment: &Comment) -> ReportResult<()>;

    /// List the comment thread for a report in creation order
    async fn list_for_report(&self, report_id: &ReportId) -> ReportResult<Vec<Comment>>;
}
