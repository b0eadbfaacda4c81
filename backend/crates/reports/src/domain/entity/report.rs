//! Report Entity
//!
//! The local report row stores only the on-chain reference and routing
//! metadata. The substantive content lives on chain and is fetched back
//! through the gateway on read.

use chrono::{DateTime, Utc};
use nid::Nanoid;
use serde_json::Value;
use uuid::Uuid;

use kernel::id::ReportId;

use crate::error::{ReportError, ReportResult};

/// Default status flag for a freshly submitted report
pub const STATUS_SUBMITTED: &str = "submitted";

/// Number of positional slots in an on-chain record
pub const CHAIN_RECORD_FIELDS: usize = 11;

/// Local report row
///
/// Links a user to an on-chain record. `chain_ref` is the reference id
/// the gateway returned at submission time and is the only key needed
/// to fetch the content back.
#[derive(Debug, Clone)]
pub struct Report {
    /// Internal UUID identifier
    pub report_id: ReportId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: Nanoid,
    /// Owning user's internal UUID
    pub owner_id: Uuid,
    /// Gateway reference id for the on-chain record
    pub chain_ref: String,
    /// Transaction hash of the on-chain write
    pub tx_hash: String,
    /// Processing status flag
    pub status: String,
    /// Whether staff have seen the report
    pub seen: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Create a new report row from a gateway submission receipt
    pub fn new(owner_id: Uuid, chain_ref: String, tx_hash: String) -> Self {
        let now = Utc::now();

        Self {
            report_id: ReportId::new(),
            public_id: Nanoid::new(),
            owner_id,
            chain_ref,
            tx_hash,
            status: STATUS_SUBMITTED.to_string(),
            seen: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The substantive report content, as stored on chain
///
/// Field order in the on-chain record is positional and fixed; see
/// [`ReportContent::from_positional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
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
}

impl ReportContent {
    /// Decode an on-chain record from its positional array form.
    ///
    /// Slot order: victim name, phone number, abuse type, gender, age,
    /// incident location, incident city, incident state, incident date,
    /// description, evidence. `age` may arrive as a number or a string
    /// and is normalized to a string. `evidence` is an array of strings.
    pub fn from_positional(values: Vec<Value>) -> ReportResult<Self> {
        if values.len() < CHAIN_RECORD_FIELDS {
            return Err(ReportError::GatewayDecode(format!(
                "expected {} fields, got {}",
                CHAIN_RECORD_FIELDS,
                values.len()
            )));
        }

        let mut values = values.into_iter();

        let victim_name = string_slot(values.next(), "victimName")?;
        let phone_number = string_slot(values.next(), "phoneNumber")?;
        let abuse_type = string_slot(values.next(), "abuseType")?;
        let gender = string_slot(values.next(), "gender")?;
        let age = age_slot(values.next())?;
        let incident_location = string_slot(values.next(), "incidentLocation")?;
        let incident_city = string_slot(values.next(), "incidentCity")?;
        let incident_state = string_slot(values.next(), "incidentState")?;
        let incident_date = string_slot(values.next(), "incidentDate")?;
        let description = string_slot(values.next(), "description")?;
        let evidence = evidence_slot(values.next())?;

        Ok(Self {
            victim_name,
            phone_number,
            abuse_type,
            gender,
            age,
            incident_location,
            incident_city,
            incident_state,
            incident_date,
            description,
            evidence,
        })
    }
}

fn string_slot(value: Option<Value>, slot: &'static str) -> ReportResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        other => Err(ReportError::GatewayDecode(format!(
            "slot {} is not a string: {:?}",
            slot, other
        ))),
    }
}

// Older records carry age as a bare number.
fn age_slot(value: Option<Value>) -> ReportResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        other => Err(ReportError::GatewayDecode(format!(
            "slot age is not a string or number: {:?}",
            other
        ))),
    }
}

fn evidence_slot(value: Option<Value>) -> ReportResult<Vec<String>> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(ReportError::GatewayDecode(format!(
                    "evidence entry is not a string: {:?}",
                    other
                ))),
            })
            .collect(),
        Some(Value::Null) | None => Ok(Vec::new()),
        other => Err(ReportError::GatewayDecode(format!(
            "slot evidence is not an array: {:?}",
            other
        ))),
    }
}

/// A report as the API returns it: local row merged with on-chain content
#[derive(Debug, Clone)]
pub struct ReportRecord {
    pub report: Report,
    pub content: ReportContent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chain_record() -> Vec<Value> {
        vec![
            json!("Asha Kumari"),
            json!("+919876543210"),
            json!("Domestic Violence"),
            json!("Female"),
            json!("27"),
            json!("12 MG Road"),
            json!("Pune"),
            json!("Maharashtra"),
            json!("2024-02-11"),
            json!("Repeated incidents over several months."),
            json!(["ipfs://evidence-1", "ipfs://evidence-2"]),
        ]
    }

    #[test]
    fn test_new_report_defaults() {
        let owner = Uuid::new_v4();
        let report = Report::new(owner, "ref-42".to_string(), "0xabc".to_string());

        assert_eq!(report.owner_id, owner);
        assert_eq!(report.chain_ref, "ref-42");
        assert_eq!(report.tx_hash, "0xabc");
        assert_eq!(report.status, STATUS_SUBMITTED);
        assert!(!report.seen);
    }

    #[test]
    fn test_decode_positional_record() {
        let content = ReportContent::from_positional(chain_record()).unwrap();

        assert_eq!(content.victim_name, "Asha Kumari");
        assert_eq!(content.abuse_type, "Domestic Violence");
        assert_eq!(content.age, "27");
        assert_eq!(content.incident_city, "Pune");
        assert_eq!(content.evidence.len(), 2);
    }

    #[test]
    fn test_decode_numeric_age() {
        let mut record = chain_record();
        record[4] = json!(27);

        let content = ReportContent::from_positional(record).unwrap();
        assert_eq!(content.age, "27");
    }

    #[test]
    fn test_decode_null_evidence_is_empty() {
        let mut record = chain_record();
        record[10] = Value::Null;

        let content = ReportContent::from_positional(record).unwrap();
        assert!(content.evidence.is_empty());
    }

    #[test]
    fn test_decode_short_record_fails() {
        let mut record = chain_record();
        record.truncate(7);

        let err = ReportContent::from_positional(record).unwrap_err();
        assert!(matches!(err, ReportError::GatewayDecode(_)));
    }

    #[test]
    fn test_decode_wrong_typed_slot_fails() {
        let mut record = chain_record();
        record[0] = json!(42);

        let err = ReportContent::from_positional(record).unwrap_err();
        assert!(matches!(err, ReportError::GatewayDecode(_)));
    }
}
