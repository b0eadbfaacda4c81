//! Use-case tests over in-memory repositories and a scripted gateway

use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use nid::Nanoid;
use uuid::Uuid;

use kernel::id::ReportId;

use crate::domain::entity::comment::Comment;
use crate::domain::entity::report::{Report, ReportContent, STATUS_SUBMITTED};
use crate::domain::repository::{CommentRepository, ReportRepository};
use crate::error::{ReportError, ReportResult};
use crate::gateway::{ChainGateway, SubmitReceipt};

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Default)]
struct InMemoryRepo {
    reports: Mutex<Vec<Report>>,
    comments: Mutex<Vec<Comment>>,
}

impl ReportRepository for InMemoryRepo {
    async fn create(&self, report: &Report) -> ReportResult<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }

    async fn find_owned(
        &self,
        public_id: &Nanoid,
        owner_id: &Uuid,
    ) -> ReportResult<Option<Report>> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.public_id == public_id && &r.owner_id == owner_id)
            .cloned())
    }

    async fn list_for_owner(&self, owner_id: &Uuid) -> ReportResult<Vec<Report>> {
        let mut reports: Vec<Report> = self
            .reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.owner_id == owner_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }
}

impl CommentRepository for InMemoryRepo {
    async fn create(&self, comment: &Comment) -> ReportResult<()> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn list_for_report(&self, report_id: &ReportId) -> ReportResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| &c.report_id == report_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}

/// Gateway that stores submitted content in memory, keyed by a
/// generated reference id.
#[derive(Default)]
struct FakeGateway {
    records: Mutex<HashMap<String, ReportContent>>,
    next_ref: AtomicU64,
}

impl ChainGateway for FakeGateway {
    async fn submit(&self, content: &ReportContent) -> ReportResult<SubmitReceipt> {
        let n = self.next_ref.fetch_add(1, Ordering::SeqCst);
        let chain_ref = format!("ref-{}", n);
        self.records
            .lock()
            .unwrap()
            .insert(chain_ref.clone(), content.clone());
        Ok(SubmitReceipt {
            chain_ref,
            tx_hash: format!("0xtx{}", n),
        })
    }

    async fn fetch(&self, chain_ref: &str) -> ReportResult<ReportContent> {
        self.records
            .lock()
            .unwrap()
            .get(chain_ref)
            .cloned()
            .ok_or_else(|| ReportError::Gateway(format!("unknown reference {}", chain_ref)))
    }

    async fn count(&self) -> ReportResult<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

/// Gateway where every call fails
struct DownGateway;

impl ChainGateway for DownGateway {
    async fn submit(&self, _content: &ReportContent) -> ReportResult<SubmitReceipt> {
        Err(ReportError::Gateway("connection refused".into()))
    }

    async fn fetch(&self, _chain_ref: &str) -> ReportResult<ReportContent> {
        Err(ReportError::Gateway("connection refused".into()))
    }

    async fn count(&self) -> ReportResult<u64> {
        Err(ReportError::Gateway("connection refused".into()))
    }
}

fn sample_input() -> crate::application::SubmitReportInput {
    crate::application::SubmitReportInput {
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

// ============================================================================
// Submission
// ============================================================================

#[cfg(test)]
mod submit_tests {
    use super::*;
    use crate::application::{SubmitReportInput, SubmitReportUseCase};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_stores_only_reference_locally() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        let owner = Uuid::new_v4();

        let use_case = SubmitReportUseCase::new(Arc::clone(&repo), Arc::clone(&gateway));
        let report = use_case.execute(owner, sample_input()).await.unwrap();

        assert_eq!(report.owner_id, owner);
        assert_eq!(report.chain_ref, "ref-0");
        assert_eq!(report.tx_hash, "0xtx0");
        assert_eq!(report.status, STATUS_SUBMITTED);
        assert!(!report.seen);

        // Content went to the gateway, not the local store
        let stored = repo.reports.lock().unwrap();
        assert_eq!(stored.len(), 1);
        let on_chain = gateway.records.lock().unwrap();
        assert_eq!(on_chain["ref-0"].victim_name, "Asha Kumari");
    }

    #[tokio::test]
    async fn test_submit_without_evidence_forwards_empty_list() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());

        let use_case = SubmitReportUseCase::new(repo, Arc::clone(&gateway));
        use_case
            .execute(Uuid::new_v4(), sample_input())
            .await
            .unwrap();

        let on_chain = gateway.records.lock().unwrap();
        assert!(on_chain["ref-0"].evidence.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_required_field() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());

        let mut input = sample_input();
        input.victim_name = "  ".into();

        let use_case = SubmitReportUseCase::new(Arc::clone(&repo), gateway);
        let err = use_case.execute(Uuid::new_v4(), input).await.unwrap_err();

        assert!(matches!(err, ReportError::MissingField("victimName")));
        assert!(repo.reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_with_gateway_down_stores_nothing() {
        let repo = Arc::new(InMemoryRepo::default());

        let use_case = SubmitReportUseCase::new(Arc::clone(&repo), Arc::new(DownGateway));
        let err = use_case
            .execute(Uuid::new_v4(), sample_input())
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::Gateway(_)));
        assert!(repo.reports.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_each_submission_gets_distinct_reference() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        let owner = Uuid::new_v4();

        let use_case = SubmitReportUseCase::new(repo, gateway);
        let first = use_case.execute(owner, sample_input()).await.unwrap();
        let mut second_input: SubmitReportInput = sample_input();
        second_input.description = "Follow-up report.".into();
        let second = use_case.execute(owner, second_input).await.unwrap();

        assert_ne!(first.chain_ref, second.chain_ref);
        assert_ne!(first.public_id, second.public_id);
    }
}

// ============================================================================
// Retrieval
// ============================================================================

#[cfg(test)]
mod fetch_tests {
    use super::*;
    use crate::application::{
        CountReportsUseCase, GetReportUseCase, ListReportsUseCase, SubmitReportUseCase,
    };
    use std::sync::Arc;

    async fn submitted_report(
        repo: &Arc<InMemoryRepo>,
        gateway: &Arc<FakeGateway>,
        owner: Uuid,
    ) -> Report {
        SubmitReportUseCase::new(Arc::clone(repo), Arc::clone(gateway))
            .execute(owner, sample_input())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_report_merges_chain_content() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        let owner = Uuid::new_v4();
        let report = submitted_report(&repo, &gateway, owner).await;

        let use_case = GetReportUseCase::new(repo, gateway);
        let record = use_case.execute(&report.public_id, &owner).await.unwrap();

        assert_eq!(record.report.chain_ref, report.chain_ref);
        assert_eq!(record.content.victim_name, "Asha Kumari");
        assert_eq!(record.content.incident_city, "Pune");
    }

    #[tokio::test]
    async fn test_foreign_report_reads_as_missing() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        let owner = Uuid::new_v4();
        let report = submitted_report(&repo, &gateway, owner).await;

        let use_case = GetReportUseCase::new(repo, gateway);
        let err = use_case
            .execute(&report.public_id, &Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::NotFound));
    }

    #[tokio::test]
    async fn test_list_returns_only_own_reports() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        submitted_report(&repo, &gateway, alice).await;
        submitted_report(&repo, &gateway, alice).await;
        submitted_report(&repo, &gateway, bob).await;

        let use_case = ListReportsUseCase::new(repo, gateway);
        let records = use_case.execute(&alice).await.unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.report.owner_id == alice));
        assert!(records.iter().all(|r| !r.content.victim_name.is_empty()));
    }

    #[tokio::test]
    async fn test_list_with_gateway_down_fails() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        let owner = Uuid::new_v4();
        submitted_report(&repo, &gateway, owner).await;

        let use_case = ListReportsUseCase::new(repo, Arc::new(DownGateway));
        let err = use_case.execute(&owner).await.unwrap_err();

        assert!(matches!(err, ReportError::Gateway(_)));
    }

    #[tokio::test]
    async fn test_count_reflects_chain_records() {
        let repo = Arc::new(InMemoryRepo::default());
        let gateway = Arc::new(FakeGateway::default());
        submitted_report(&repo, &gateway, Uuid::new_v4()).await;
        submitted_report(&repo, &gateway, Uuid::new_v4()).await;

        let use_case = CountReportsUseCase::new(gateway);
        assert_eq!(use_case.execute().await.unwrap(), 2);
    }
}

// ============================================================================
// Comments
// ============================================================================

#[cfg(test)]
mod comment_tests {
    use super::*;
    use crate::application::{AddCommentUseCase, ListCommentsUseCase, SubmitReportUseCase};
    use std::sync::Arc;

    async fn submitted_report(repo: &Arc<InMemoryRepo>, owner: Uuid) -> Report {
        SubmitReportUseCase::new(Arc::clone(repo), Arc::new(FakeGateway::default()))
            .execute(owner, sample_input())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_comment_thread_in_creation_order() {
        let repo = Arc::new(InMemoryRepo::default());
        let owner = Uuid::new_v4();
        let report = submitted_report(&repo, owner).await;

        let add = AddCommentUseCase::new(Arc::clone(&repo), Arc::clone(&repo));
        add.execute(&report.public_id, &owner, "First update".into())
            .await
            .unwrap();
        add.execute(&report.public_id, &owner, "Second update".into())
            .await
            .unwrap();

        let list = ListCommentsUseCase::new(Arc::clone(&repo), repo);
        let comments = list.execute(&report.public_id, &owner).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].message, "First update");
        assert_eq!(comments[1].message, "Second update");
        assert!(comments.iter().all(|c| c.role == "user"));
    }

    #[tokio::test]
    async fn test_cannot_comment_on_foreign_report() {
        let repo = Arc::new(InMemoryRepo::default());
        let owner = Uuid::new_v4();
        let report = submitted_report(&repo, owner).await;

        let add = AddCommentUseCase::new(Arc::clone(&repo), Arc::clone(&repo));
        let err = add
            .execute(&report.public_id, &Uuid::new_v4(), "intruding".into())
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::NotFound));
        assert!(repo.comments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let repo = Arc::new(InMemoryRepo::default());
        let owner = Uuid::new_v4();
        let report = submitted_report(&repo, owner).await;

        let add = AddCommentUseCase::new(Arc::clone(&repo), Arc::clone(&repo));
        let err = add
            .execute(&report.public_id, &owner, "   ".into())
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::MissingField("message")));
    }
}
