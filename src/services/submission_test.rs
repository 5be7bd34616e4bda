use super::*;
use crate::event::{ErrorCode, EventKind};
use crate::record::PurchaseSource;
use crate::state::test_helpers::{dummy_draft, dummy_submission, seed_submissions, test_state};

async fn seeded_state() -> ConsoleState {
    let state = test_state();
    seed_submissions(
        &state,
        vec![dummy_submission(1), dummy_submission(2), dummy_submission(3)],
    )
    .await;
    state
}

// =============================================================================
// REVIEW DECISIONS
// =============================================================================

#[tokio::test]
async fn approve_sets_review_block_and_keeps_order() {
    let state = seeded_state().await;
    let version_before = state.version().await;

    let updated = approve(&state, &SubmissionId::from("SUB-002"), "invoice verified")
        .await
        .expect("approve");

    assert_eq!(updated.reward_status, RewardStatus::Approved);
    assert_eq!(updated.reward_sent.as_deref(), Some("REWARD20OFF"));
    assert_eq!(updated.approval_comment.as_deref(), Some("invoice verified"));
    assert!(updated.rejection_reason.is_none());
    assert!(updated.review_fields_consistent());

    let all = list(&state).await;
    let ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["SUB-001", "SUB-002", "SUB-003"]);
    assert_eq!(all[1].reward_status, RewardStatus::Approved);
    assert_eq!(all[0].reward_status, RewardStatus::Pending);
    assert_eq!(all[2].reward_status, RewardStatus::Pending);
    assert_eq!(state.version().await, version_before + 1);
}

#[tokio::test]
async fn reject_sets_reason_and_clears_reward() {
    let state = seeded_state().await;

    let updated = reject(&state, &SubmissionId::from("SUB-001"), "invoice unreadable")
        .await
        .expect("reject");

    assert_eq!(updated.reward_status, RewardStatus::Rejected);
    assert!(updated.reward_sent.is_none());
    assert!(updated.approval_comment.is_none());
    assert_eq!(updated.rejection_reason.as_deref(), Some("invoice unreadable"));
    assert!(updated.review_fields_consistent());
}

#[tokio::test]
async fn approve_after_reject_clears_stale_reason() {
    let state = seeded_state().await;
    let id = SubmissionId::from("SUB-003");

    reject(&state, &id, "blurry photo").await.expect("reject");
    let updated = approve(&state, &id, "resubmitted clearly").await.expect("approve");

    assert_eq!(updated.reward_status, RewardStatus::Approved);
    assert!(updated.rejection_reason.is_none());
    assert_eq!(updated.approval_comment.as_deref(), Some("resubmitted clearly"));
    assert!(updated.review_fields_consistent());
}

#[tokio::test]
async fn reject_unknown_id_leaves_store_unchanged() {
    let state = seeded_state().await;
    let before = list(&state).await;
    let version_before = state.version().await;

    let err = reject(&state, &SubmissionId::from("SUB-999"), "whatever")
        .await
        .expect_err("unknown id");
    assert!(matches!(err, SubmissionError::NotFound(ref id) if id.as_str() == "SUB-999"));
    assert_eq!(err.error_code(), "E_SUBMISSION_NOT_FOUND");
    assert!(!err.retryable());

    assert_eq!(list(&state).await, before);
    assert_eq!(state.version().await, version_before);
}

#[tokio::test]
async fn approve_unknown_id_errors() {
    let state = seeded_state().await;
    let err = approve(&state, &SubmissionId::from("SUB-404"), "")
        .await
        .expect_err("unknown id");
    assert!(matches!(err, SubmissionError::NotFound(_)));
}

#[tokio::test]
async fn approve_accepts_empty_comment() {
    let state = seeded_state().await;
    let updated = approve(&state, &SubmissionId::from("SUB-001"), "").await.expect("approve");
    assert_eq!(updated.approval_comment.as_deref(), Some(""));
    assert_eq!(updated.reward_sent.as_deref(), Some("REWARD20OFF"));
}

#[tokio::test]
async fn decisions_broadcast_events() {
    let state = seeded_state().await;
    let (_id, mut rx) = state.subscribe().await;

    approve(&state, &SubmissionId::from("SUB-001"), "ok").await.expect("approve");
    reject(&state, &SubmissionId::from("SUB-002"), "no").await.expect("reject");

    let first = rx.try_recv().expect("approved event");
    assert_eq!(first.kind, EventKind::SubmissionApproved { submission_id: "SUB-001".into() });
    let second = rx.try_recv().expect("rejected event");
    assert_eq!(second.kind, EventKind::SubmissionRejected { submission_id: "SUB-002".into() });
    assert!(second.version > first.version);
}

// =============================================================================
// INGEST
// =============================================================================

#[tokio::test]
async fn ingest_assigns_sequential_ids_and_forces_pending() {
    let state = test_state();

    let first = ingest(&state, dummy_draft(1)).await.expect("ingest");
    let second = ingest(&state, dummy_draft(2)).await.expect("ingest");

    assert_eq!(first.id.as_str(), "SUB-001");
    assert_eq!(second.id.as_str(), "SUB-002");
    assert_eq!(first.reward_status, RewardStatus::Pending);
    assert!(first.reward_sent.is_none());
    assert!(first.submitted_ts > 0);
    assert_eq!(list(&state).await.len(), 2);
}

#[tokio::test]
async fn ingest_rejects_blank_customer_name() {
    let state = test_state();
    let mut draft = dummy_draft(1);
    draft.customer_name = "   ".into();

    let err = ingest(&state, draft).await.expect_err("blank name");
    assert!(matches!(err, SubmissionError::MissingCustomerName));
    assert!(list(&state).await.is_empty());
}

#[tokio::test]
async fn ingest_broadcasts_received_event() {
    let state = test_state();
    let (_id, mut rx) = state.subscribe().await;

    ingest(&state, dummy_draft(1)).await.expect("ingest");
    let event = rx.try_recv().expect("event");
    assert_eq!(event.kind, EventKind::SubmissionReceived { submission_id: "SUB-001".into() });
}

// =============================================================================
// READ SIDE
// =============================================================================

#[tokio::test]
async fn get_returns_clone() {
    let state = seeded_state().await;
    let sub = get(&state, &SubmissionId::from("SUB-002")).await.expect("get");
    assert_eq!(sub.id.as_str(), "SUB-002");

    let err = get(&state, &SubmissionId::from("SUB-404")).await.expect_err("missing");
    assert!(matches!(err, SubmissionError::NotFound(_)));
}

#[tokio::test]
async fn filter_query_is_case_insensitive_and_order_preserving() {
    let state = test_state();
    let mut a = dummy_submission(1);
    a.customer_name = "Rohan Mehta".into();
    let mut b = dummy_submission(2);
    b.customer_name = "Priya Shah".into();
    let mut c = dummy_submission(3);
    c.customer_name = "Rohit Sharma".into();
    seed_submissions(&state, vec![a, b, c]).await;

    let filter = SubmissionFilter { query: Some("roh".into()), ..SubmissionFilter::default() };
    let hits = list_filtered(&state, &filter).await;
    let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["SUB-001", "SUB-003"]);
}

#[tokio::test]
async fn filter_matches_id_email_and_product() {
    let state = seeded_state().await;

    let by_id = SubmissionFilter { query: Some("sub-002".into()), ..SubmissionFilter::default() };
    assert_eq!(list_filtered(&state, &by_id).await.len(), 1);

    let by_email = SubmissionFilter { query: Some("consumer3@".into()), ..SubmissionFilter::default() };
    assert_eq!(list_filtered(&state, &by_email).await.len(), 1);

    let by_product = SubmissionFilter { query: Some("shampoo".into()), ..SubmissionFilter::default() };
    assert_eq!(list_filtered(&state, &by_product).await.len(), 3);
}

#[tokio::test]
async fn filter_by_status_and_scan_source() {
    let state = seeded_state().await;
    approve(&state, &SubmissionId::from("SUB-001"), "ok").await.expect("approve");

    let approved = SubmissionFilter { status: Some(RewardStatus::Approved), ..SubmissionFilter::default() };
    let hits = list_filtered(&state, &approved).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "SUB-001");

    let barcode = SubmissionFilter { scan_source: Some(ScanSource::Barcode), ..SubmissionFilter::default() };
    assert!(list_filtered(&state, &barcode).await.is_empty());
}

#[tokio::test]
async fn blank_query_matches_everything() {
    let state = seeded_state().await;
    let filter = SubmissionFilter { query: Some("   ".into()), ..SubmissionFilter::default() };
    assert_eq!(list_filtered(&state, &filter).await.len(), 3);
}

#[tokio::test]
async fn rows_are_masked() {
    let state = test_state();
    let mut sub = dummy_submission(1);
    sub.mobile_number = "+91 98200 12345".into();
    sub.email = "rohan.mehta@example.com".into();
    sub.purchase_source = PurchaseSource::Other("Kirana store".into());
    seed_submissions(&state, vec![sub]).await;

    let rows = list_rows(&state, &SubmissionFilter::default()).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].mobile_masked, "+** ***** ***45");
    assert_eq!(rows[0].email_masked, "r**********@example.com");
}
