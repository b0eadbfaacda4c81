//! Submit Report Use Case
//!
//! Forwards report content to the blockchain gateway and stores only the
//! returned reference id and transaction hash locally.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::report::{Report, ReportContent};
use crate::domain::repository::ReportRepository;
use crate::error::{ReportError, ReportResult};
use crate::gateway::ChainGateway;

/// Submit report input
///
/// `evidence` is optional and defaults to the empty list.
pub struct SubmitReportInput {
    pub victim_name: String,
    pub phone_number: String,
    pub abuse_type: String,
    pub gender: String,
    pub age: String,
    pub incident_location: String,
    pub incident_city: String,
    pub incident_state: String,
    pub incident_date: String,
    pub description: String,
    pub evidence: Option<Vec<String>>,
}

/// Submit report use case
pub struct SubmitReportUseCase<R, G>
where
    R: ReportRepository,
    G: ChainGateway,
{
    report_repo: Arc<R>,
    gateway: Arc<G>,
}

impl<R, G> SubmitReportUseCase<R, G>
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

    pub async fn execute(&self, owner_id: Uuid, input: SubmitReportInput) -> ReportResult<Report> {
        let content = validate_content(input)?;

        let receipt = self.gateway.submit(&content).await?;

        let report = Report::new(owner_id, receipt.chain_ref, receipt.tx_hash);
        self.report_repo.create(&report).await?;

        tracing::info!(
            public_id = %report.public_id,
            chain_ref = %report.chain_ref,
            "Report submitted"
        );

        Ok(report)
    }
}

fn validate_content(input: SubmitReportInput) -> ReportResult<ReportContent> {
    Ok(ReportContent {
        victim_name: required_field("victimName", &input.victim_name)?,
        phone_number: required_field("phoneNumber", &input.phone_number)?,
        abuse_type: required_field("abuseType", &input.abuse_type)?,
        gender: required_field("gender", &input.gender)?,
        age: required_field("age", &input.age)?,
        incident_location: required_field("incidentLocation", &input.incident_location)?,
        incident_city: required_field("incidentCity", &input.incident_city)?,
        incident_state: required_field("incidentState", &input.incident_state)?,
        incident_date: required_field("incidentDate", &input.incident_date)?,
        description: required_field("description", &input.description)?,
        evidence: input.evidence.unwrap_or_default(),
    })
}

fn required_field(name: &'static str, value: &str) -> ReportResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ReportError::MissingField(name));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> SubmitReportInput {
        SubmitReportInput {
            victim_name: "Asha Kumari".into(),
            phone_number: "+919876543210".into(),
            abuse_type: "Domestic Violence".into(),
            gender: "Female".into(),
            age: "27".into(),
            incident_location: "12 MG Road".into(),
            incident_city: "Pune".into(),
            incident_state: "Maharashtra".into(),
            incident_date: "2024-02-11".into(),
            description: "Repeated incidents.".into(),
            evidence: None,
        }
    }

    #[test]
    fn test_missing_evidence_defaults_to_empty() {
        let content = validate_content(sample_input()).unwrap();
        assert!(content.evidence.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut input = sample_input();
        input.victim_name = "  Asha Kumari  ".into();

        let content = validate_content(input).unwrap();
        assert_eq!(content.victim_name, "Asha Kumari");
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut input = sample_input();
        input.description = "   ".into();

        let err = validate_content(input).unwrap_err();
        assert!(matches!(err, ReportError::MissingField("description")));
    }
}
