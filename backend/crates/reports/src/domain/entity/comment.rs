//! Comment Entity
//!
//! A thread entry attached to a report.

use chrono::{DateTime, Utc};

use kernel::id::{CommentId, ReportId};

/// Role for comments created by the reporting user
pub const ROLE_USER: &str = "user";

/// Comment on a report
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub report_id: ReportId,
    /// Who wrote it: `"user"` for the reporter, staff roles otherwise
    pub role: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(report_id: ReportId, role: impl Into<String>, message: String) -> Self {
        Self {
            comment_id: CommentId::new(),
            report_id,
            role: role.into(),
            message,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment() {
        let report_id = ReportId::new();
        let comment = Comment::new(report_id, ROLE_USER, "Any update on this?".to_string());

        assert_eq!(comment.report_id, report_id);
        assert_eq!(comment.role, "user");
        assert_eq!(comment.message, "Any update on this?");
    }
}
