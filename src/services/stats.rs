//! Dashboard stats — pure derivation over the store, no caching.

use serde::Serialize;

use crate::record::{RewardStatus, ScanSource, TicketStatus};
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_submissions: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Approved share of decided submissions. Zero while nothing is decided.
    pub approval_rate: f64,
    pub qr_scans: usize,
    pub barcode_scans: usize,
    pub manual_entries: usize,
    pub open_tickets: usize,
    pub in_progress_tickets: usize,
    pub resolved_tickets: usize,
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Compute the dashboard numbers from the current store contents.
pub async fn dashboard(state: &ConsoleState) -> DashboardStats {
    let inner = state.inner.read().await;

    let mut stats = DashboardStats {
        total_submissions: inner.submissions.len(),
        pending: 0,
        approved: 0,
        rejected: 0,
        approval_rate: 0.0,
        qr_scans: 0,
        barcode_scans: 0,
        manual_entries: 0,
        open_tickets: 0,
        in_progress_tickets: 0,
        resolved_tickets: 0,
    };

    for sub in &inner.submissions {
        match sub.reward_status {
            RewardStatus::Pending => stats.pending += 1,
            RewardStatus::Approved => stats.approved += 1,
            RewardStatus::Rejected => stats.rejected += 1,
        }
        match sub.scan_source {
            ScanSource::QrCode => stats.qr_scans += 1,
            ScanSource::Barcode => stats.barcode_scans += 1,
            ScanSource::ManualEntry => stats.manual_entries += 1,
        }
    }

    for ticket in &inner.tickets {
        match ticket.status {
            TicketStatus::Open => stats.open_tickets += 1,
            TicketStatus::InProgress => stats.in_progress_tickets += 1,
            TicketStatus::Resolved => stats.resolved_tickets += 1,
        }
    }

    let decided = stats.approved + stats.rejected;
    if decided > 0 {
        #[allow(clippy::cast_precision_loss)]
        {
            stats.approval_rate = stats.approved as f64 / decided as f64;
        }
    }

    stats
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{SubmissionId, TicketPriority};
    use crate::services::{submission, support};
    use crate::state::test_helpers::{dummy_submission, seed_submissions, test_state};

    #[tokio::test]
    async fn empty_store_is_all_zero() {
        let state = test_state();
        let stats = dashboard(&state).await;
        assert_eq!(stats.total_submissions, 0);
        assert!(stats.approval_rate.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn counts_follow_review_decisions() {
        let state = test_state();
        let mut barcode = dummy_submission(3);
        barcode.scan_source = ScanSource::Barcode;
        seed_submissions(
            &state,
            vec![dummy_submission(1), dummy_submission(2), barcode, dummy_submission(4)],
        )
        .await;

        submission::approve(&state, &SubmissionId::from("SUB-001"), "ok").await.expect("approve");
        submission::approve(&state, &SubmissionId::from("SUB-002"), "ok").await.expect("approve");
        submission::reject(&state, &SubmissionId::from("SUB-003"), "no").await.expect("reject");

        let stats = dashboard(&state).await;
        assert_eq!(stats.total_submissions, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.rejected, 1);
        assert!((stats.approval_rate - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.qr_scans, 3);
        assert_eq!(stats.barcode_scans, 1);
        assert_eq!(stats.manual_entries, 0);
    }

    #[tokio::test]
    async fn ticket_counts_by_status() {
        let state = test_state();
        support::open_ticket(&state, "A", "x", TicketPriority::Low).await.expect("open");
        let b = support::open_ticket(&state, "B", "y", TicketPriority::High).await.expect("open");
        let c = support::open_ticket(&state, "C", "z", TicketPriority::Low).await.expect("open");
        support::start(&state, &b.id).await.expect("start");
        support::resolve(&state, &c.id).await.expect("resolve");

        let stats = dashboard(&state).await;
        assert_eq!(stats.open_tickets, 1);
        assert_eq!(stats.in_progress_tickets, 1);
        assert_eq!(stats.resolved_tickets, 1);
    }
}
