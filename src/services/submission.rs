//! Submission service — ingest, review decisions, list projections.
//!
//! DESIGN
//! ======
//! Review mutations update the record in place under the write lock,
//! bump the store version, and return the updated clone for the caller
//! to render. Order in the store never changes on review, so list views
//! keep their row positions. The event broadcast happens after the lock
//! is released.

use tracing::info;

use crate::event::EventKind;
use crate::mask::{mask_email, mask_mobile};
use crate::record::{
    RewardStatus, ScanSource, Submission, SubmissionDraft, SubmissionId,
};
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission not found: {0}")]
    NotFound(SubmissionId),
    #[error("submission draft has no customer name")]
    MissingCustomerName,
}

impl crate::event::ErrorCode for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_SUBMISSION_NOT_FOUND",
            Self::MissingCustomerName => "E_SUBMISSION_MISSING_CUSTOMER_NAME",
        }
    }
}

/// Filter for the submissions list view. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    /// Case-insensitive substring over name, mobile, email, product, and id.
    pub query: Option<String>,
    pub status: Option<RewardStatus>,
    pub scan_source: Option<ScanSource>,
}

/// One masked row of the submissions list. The detail view uses the full
/// [`Submission`] instead.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SubmissionRow {
    pub id: SubmissionId,
    pub customer_name: String,
    pub mobile_masked: String,
    pub email_masked: String,
    pub product_scanned: String,
    pub scan_source: ScanSource,
    pub reward_status: RewardStatus,
    pub submitted_ts: i64,
}

impl SubmissionRow {
    fn from_submission(sub: &Submission) -> Self {
        Self {
            id: sub.id.clone(),
            customer_name: sub.customer_name.clone(),
            mobile_masked: mask_mobile(&sub.mobile_number),
            email_masked: mask_email(&sub.email),
            product_scanned: sub.product_scanned.clone(),
            scan_source: sub.scan_source,
            reward_status: sub.reward_status,
            submitted_ts: sub.submitted_ts,
        }
    }
}

// =============================================================================
// INGEST
// =============================================================================

/// Accept an externally created submission draft. Assigns the next
/// sequential id, stamps the arrival time, and forces the review state
/// to pending regardless of what the draft carried.
///
/// # Errors
///
/// Returns `MissingCustomerName` if the draft's customer name is blank.
pub async fn ingest(state: &ConsoleState, draft: SubmissionDraft) -> Result<Submission, SubmissionError> {
    if draft.customer_name.trim().is_empty() {
        return Err(SubmissionError::MissingCustomerName);
    }

    let submission = {
        let mut inner = state.inner.write().await;
        let id = SubmissionId(inner.next_submission_id());
        let submission = Submission {
            id,
            customer_name: draft.customer_name,
            mobile_number: draft.mobile_number,
            email: draft.email,
            purchase_source: draft.purchase_source,
            product_scanned: draft.product_scanned,
            product_id: draft.product_id,
            invoice_amount: draft.invoice_amount,
            invoice_upload: draft.invoice_upload,
            scan_source: draft.scan_source,
            reward_status: RewardStatus::Pending,
            reward_sent: None,
            approval_comment: None,
            rejection_reason: None,
            submitted_ts: crate::event::now_ms(),
            location: draft.location,
            campaign_id: draft.campaign_id,
        };
        inner.submissions.push(submission.clone());
        inner.version += 1;
        submission
    };

    info!(id = %submission.id, "submission ingested");
    state
        .publish(EventKind::SubmissionReceived { submission_id: submission.id.0.clone() })
        .await;
    Ok(submission)
}

// =============================================================================
// REVIEW DECISIONS
// =============================================================================

/// Approve a submission: status becomes approved, the console-wide reward
/// code is recorded as sent, and the reviewer's comment is stored. A stale
/// rejection reason from an earlier decision is cleared. The record keeps
/// its position in the store.
///
/// # Errors
///
/// Returns `NotFound` if the id matches nothing; the store is untouched.
pub async fn approve(
    state: &ConsoleState,
    id: &SubmissionId,
    comment: impl Into<String>,
) -> Result<Submission, SubmissionError> {
    let updated = {
        let mut inner = state.inner.write().await;
        let pos = inner
            .submissions
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| SubmissionError::NotFound(id.clone()))?;

        let sub = &mut inner.submissions[pos];
        sub.reward_status = RewardStatus::Approved;
        sub.reward_sent = Some(state.config.reward_code.clone());
        sub.approval_comment = Some(comment.into());
        sub.rejection_reason = None;
        let updated = sub.clone();
        inner.version += 1;
        updated
    };

    info!(id = %updated.id, reward = updated.reward_sent.as_deref().unwrap_or(""), "submission approved");
    state
        .publish(EventKind::SubmissionApproved { submission_id: updated.id.0.clone() })
        .await;
    Ok(updated)
}

/// Reject a submission: status becomes rejected, the reason is stored, and
/// any reward or comment from an earlier decision is cleared.
///
/// # Errors
///
/// Returns `NotFound` if the id matches nothing; the store is untouched.
pub async fn reject(
    state: &ConsoleState,
    id: &SubmissionId,
    reason: impl Into<String>,
) -> Result<Submission, SubmissionError> {
    let updated = {
        let mut inner = state.inner.write().await;
        let pos = inner
            .submissions
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| SubmissionError::NotFound(id.clone()))?;

        let sub = &mut inner.submissions[pos];
        sub.reward_status = RewardStatus::Rejected;
        sub.reward_sent = None;
        sub.approval_comment = None;
        sub.rejection_reason = Some(reason.into());
        let updated = sub.clone();
        inner.version += 1;
        updated
    };

    info!(id = %updated.id, "submission rejected");
    state
        .publish(EventKind::SubmissionRejected { submission_id: updated.id.0.clone() })
        .await;
    Ok(updated)
}

// =============================================================================
// READ SIDE
// =============================================================================

/// Fetch one submission by id.
///
/// # Errors
///
/// Returns `NotFound` if the id matches nothing.
pub async fn get(state: &ConsoleState, id: &SubmissionId) -> Result<Submission, SubmissionError> {
    let inner = state.inner.read().await;
    inner
        .submissions
        .iter()
        .find(|s| &s.id == id)
        .cloned()
        .ok_or_else(|| SubmissionError::NotFound(id.clone()))
}

/// All submissions in store order.
pub async fn list(state: &ConsoleState) -> Vec<Submission> {
    let inner = state.inner.read().await;
    inner.submissions.clone()
}

/// Filtered submissions in store order. Full records, for callers that
/// open the review flow from a filtered list.
pub async fn list_filtered(state: &ConsoleState, filter: &SubmissionFilter) -> Vec<Submission> {
    let inner = state.inner.read().await;
    inner
        .submissions
        .iter()
        .filter(|s| matches_filter(s, filter))
        .cloned()
        .collect()
}

/// Filtered, masked rows for the list view.
pub async fn list_rows(state: &ConsoleState, filter: &SubmissionFilter) -> Vec<SubmissionRow> {
    let inner = state.inner.read().await;
    inner
        .submissions
        .iter()
        .filter(|s| matches_filter(s, filter))
        .map(SubmissionRow::from_submission)
        .collect()
}

fn matches_filter(sub: &Submission, filter: &SubmissionFilter) -> bool {
    if let Some(status) = filter.status {
        if sub.reward_status != status {
            return false;
        }
    }
    if let Some(scan_source) = filter.scan_source {
        if sub.scan_source != scan_source {
            return false;
        }
    }
    if let Some(query) = filter.query.as_deref() {
        let query = query.trim().to_lowercase();
        if !query.is_empty() {
            let haystacks = [
                sub.customer_name.as_str(),
                sub.mobile_number.as_str(),
                sub.email.as_str(),
                sub.product_scanned.as_str(),
                sub.id.as_str(),
            ];
            if !haystacks.iter().any(|h| h.to_lowercase().contains(&query)) {
                return false;
            }
        }
    }
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
