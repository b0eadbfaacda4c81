//! HTTP client for the blockchain gateway

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entity::report::ReportContent;
use crate::error::{ReportError, ReportResult};
use crate::gateway::{ChainGateway, SubmitReceipt};

/// JSON-over-HTTP gateway client
///
/// Endpoints, relative to the configured base URL:
/// - `POST /reports` submits content, returns `{reportId, txHash}`
/// - `GET /reports/{ref}` returns the positional record array
/// - `GET /reports/count` returns `{count}`
#[derive(Debug, Clone)]
pub struct HttpChainGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChainGateway {
    /// Build a client against the given base URL with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ReportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Internal(format!("gateway client build failed: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ChainGateway for HttpChainGateway {
    async fn submit(&self, content: &ReportContent) -> ReportResult<SubmitReceipt> {
        let response = self
            .client
            .post(self.url("/reports"))
            .json(&SubmitBody::from(content))
            .send()
            .await
            .map_err(gateway_error)?
            .error_for_status()
            .map_err(gateway_error)?;

        let body: SubmitResponse = response.json().await.map_err(gateway_error)?;

        tracing::info!(chain_ref = %body.report_id, tx_hash = %body.tx_hash, "Report stored on chain");

        Ok(SubmitReceipt {
            chain_ref: body.report_id,
            tx_hash: body.tx_hash,
        })
    }

    async fn fetch(&self, chain_ref: &str) -> ReportResult<ReportContent> {
        let response = self
            .client
            .get(self.url(&format!("/reports/{}", chain_ref)))
            .send()
            .await
            .map_err(gateway_error)?
            .error_for_status()
            .map_err(gateway_error)?;

        let record: Vec<Value> = response.json().await.map_err(gateway_error)?;

        ReportContent::from_positional(record)
    }

    async fn count(&self) -> ReportResult<u64> {
        let response = self
            .client
            .get(self.url("/reports/count"))
            .send()
            .await
            .map_err(gateway_error)?
            .error_for_status()
            .map_err(gateway_error)?;

        let body: CountResponse = response.json().await.map_err(gateway_error)?;

        Ok(body.count)
    }
}

fn gateway_error(err: reqwest::Error) -> ReportError {
    ReportError::Gateway(err.to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitBody<'a> {
    victim_name: &'a str,
    phone_number: &'a str,
    abuse_type: &'a str,
    gender: &'a str,
    age: &'a str,
    incident_location: &'a str,
    incident_city: &'a str,
    incident_state: &'a str,
    incident_date: &'a str,
    description: &'a str,
    evidence: &'a [String],
}

impl<'a> From<&'a ReportContent> for SubmitBody<'a> {
    fn from(content: &'a ReportContent) -> Self {
        Self {
            victim_name: &content.victim_name,
            phone_number: &content.phone_number,
            abuse_type: &content.abuse_type,
            gender: &content.gender,
            age: &content.age,
            incident_location: &content.incident_location,
            incident_city: &content.incident_city,
            incident_state: &content.incident_state,
            incident_date: &content.incident_date,
            description: &content.description,
            evidence: &content.evidence,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    report_id: String,
    tx_hash: String,
}

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}
