pub mod comment_thread;
pub mod config;
pub mod fetch_reports;
pub mod submit_report;

pub use comment_thread::{AddCommentUseCase, ListCommentsUseCase};
pub use config::ReportsConfig;
pub use fetch_reports::{CountReportsUseCase, GetReportUseCase, ListReportsUseCase};
pub use submit_report::{SubmitReportInput, SubmitReportUseCase};
