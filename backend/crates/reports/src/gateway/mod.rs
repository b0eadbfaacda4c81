//! Blockchain Gateway
//!
//! The chain is an opaque external service reached over HTTP. This crate
//! only ever submits report content, fetches a record back by reference
//! id, and asks for the total record count. Retries, gas handling and
//! confirmation waiting are the gateway's problem, not ours.

pub mod http;

use crate::domain::entity::report::ReportContent;
use crate::error::ReportResult;

pub use http::HttpChainGateway;

/// What the gateway returns for a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Reference id for fetching the record back later
    pub chain_ref: String,
    /// Transaction hash of the on-chain write
    pub tx_hash: String,
}

/// Blockchain gateway interface
#[trait_variant::make(ChainGateway: Send)]
pub trait LocalChainGateway {
    /// Submit report content for on-chain storage
    async fn submit(&self, content: &ReportContent) -> ReportResult<SubmitReceipt>;

    /// Fetch a stored record by its reference id
    async fn fetch(&self, chain_ref: &str) -> ReportResult<ReportContent>;

    /// Total number of records stored on chain
    async fn count(&self) -> ReportResult<u64>;
}
