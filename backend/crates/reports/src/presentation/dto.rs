//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::comment::Comment;
use crate::domain::entity::report::{Report, ReportRecord};

// ============================================================================
// Submit
// ============================================================================

/// Submit report request
///
/// `age` tolerates a JSON number for older clients. `evidence` may be
/// omitted entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    pub victim_name: String,
    pub phone_number: String,
    pub abuse_type: String,
    pub gender: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    pub incident_location: String,
    pub incident_city: String,
    pub incident_state: String,
    pub incident_date: String,
    pub description: String,
    #[serde(default)]
    pub evidence: Option<Vec<String>>,
}

/// Submit report response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportResponse {
    pub success: bool,
    pub message: String,
    pub report: ReportSummaryDto,
}

// ============================================================================
// Report payloads
// ============================================================================

/// Local report row, as stored (no on-chain content)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryDto {
    pub public_id: String,
    pub chain_ref: String,
    pub tx_hash: String,
    pub status: String,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Report> for ReportSummaryDto {
    fn from(report: &Report) -> Self {
        Self {
            public_id: report.public_id.to_string(),
            chain_ref: report.chain_ref.clone(),
            tx_hash: report.tx_hash.clone(),
            status: report.status.clone(),
            seen: report.seen,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

/// Full report: local row merged with on-chain content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecordDto {
    pub public_id: String,
    pub chain_ref: String,
    pub tx_hash: String,
    pub status: String,
    pub seen: bool,
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
    pub evidence: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ReportRecord> for ReportRecordDto {
    fn from(record: &ReportRecord) -> Self {
        let report = &record.report;
        let content = &record.content;

        Self {
            public_id: report.public_id.to_string(),
            chain_ref: report.chain_ref.clone(),
            tx_hash: report.tx_hash.clone(),
            status: report.status.clone(),
            seen: report.seen,
            victim_name: content.victim_name.clone(),
            phone_number: content.phone_number.clone(),
            abuse_type: content.abuse_type.clone(),
            gender: content.gender.clone(),
            age: content.age.clone(),
            incident_location: content.incident_location.clone(),
            incident_city: content.incident_city.clone(),
            incident_state: content.incident_state.clone(),
            incident_date: content.incident_date.clone(),
            description: content.description.clone(),
            evidence: content.evidence.clone(),
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

/// List reports response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReportsResponse {
    pub success: bool,
    pub reports: Vec<ReportRecordDto>,
}

/// Single report response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetReportResponse {
    pub success: bool,
    pub report: ReportRecordDto,
}

/// On-chain report count response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountReportsResponse {
    pub success: bool,
    pub count: u64,
}

// ============================================================================
// Comments
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub message: String,
}

/// Comment as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub role: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            role: comment.role.clone(),
            message: comment.message.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Add comment response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentResponse {
    pub success: bool,
    pub message: String,
    pub comment: CommentDto,
}

/// List comments response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsResponse {
    pub success: bool,
    pub comments: Vec<CommentDto>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_numeric_age() {
        let req: SubmitReportRequest = serde_json::from_str(
            r#"{
                "victimName": "Asha",
                "phoneNumber": "+919876543210",
                "abuseType": "Domestic Violence",
                "gender": "Female",
                "age": 27,
                "incidentLocation": "12 MG Road",
                "incidentCity": "Pune",
                "incidentState": "Maharashtra",
                "incidentDate": "2024-02-11",
                "description": "Repeated incidents."
            }"#,
        )
        .unwrap();

        assert_eq!(req.age, "27");
        assert!(req.evidence.is_none());
    }

    #[test]
    fn test_submit_request_string_age_and_evidence() {
        let req: SubmitReportRequest = serde_json::from_str(
            r#"{
                "victimName": "Asha",
                "phoneNumber": "+919876543210",
                "abuseType": "Domestic Violence",
                "gender": "Female",
                "age": "27",
                "incidentLocation": "12 MG Road",
                "incidentCity": "Pune",
                "incidentState": "Maharashtra",
                "incidentDate": "2024-02-11",
                "description": "Repeated incidents.",
                "evidence": ["ipfs://evidence-1"]
            }"#,
        )
        .unwrap();

        assert_eq!(req.age, "27");
        assert_eq!(req.evidence.unwrap().len(), 1);
    }
}
