//! Reports Backend Module
//!
//! Abuse reports and their comment threads. The substantive report
//! content lives on chain behind an HTTP gateway; the local database
//! keeps only the reference id, transaction hash and routing flags.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases and application services
//! - `gateway/` - Blockchain gateway trait and HTTP client
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! Every read, list and comment operation resolves the report through
//! `find_owned`, so another user's report is indistinguishable from a
//! missing one.

pub mod application;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ReportsConfig;
pub use error::{ReportError, ReportResult};
pub use gateway::{ChainGateway, HttpChainGateway, SubmitReceipt};
pub use infra::postgres::PgReportsRepository;
pub use presentation::router::reports_router;
