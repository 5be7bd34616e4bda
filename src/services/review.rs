//! Review session — the submission detail flow with prev/next navigation.
//!
//! DESIGN
//! ======
//! A `ReviewSession` is transient view state owned by the caller, not part
//! of [`ConsoleState`]. It holds the selected submission plus a snapshot
//! of the list it was opened from, so navigation order stays fixed even
//! while the store changes underneath. `resync` refreshes the snapshot
//! from the store by id when the caller wants current review state.
//!
//! Invariant while open: `list[index].id == selected.id`. Navigation
//! clamps at either end; first and last never wrap.

use tracing::debug;

use crate::record::{RewardStatus, Submission, SubmissionId};
use crate::services::submission::{self, SubmissionError};
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("no review session is open")]
    Closed,
    #[error("cannot open a review session over an empty list")]
    EmptyList,
    #[error("submission {0} is not in the supplied list")]
    NotInList(SubmissionId),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl crate::event::ErrorCode for ReviewError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Closed => "E_REVIEW_CLOSED",
            Self::EmptyList => "E_REVIEW_EMPTY_LIST",
            Self::NotInList(_) => "E_REVIEW_NOT_IN_LIST",
            Self::Submission(err) => crate::event::ErrorCode::error_code(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Caller-owned navigation state for the detail modal.
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    selected: Option<Submission>,
    list: Vec<Submission>,
    index: Option<usize>,
}

// =============================================================================
// SESSION
// =============================================================================

impl ReviewSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the session on `submission`, navigating within `list`. An
    /// omitted list means a single-element list holding just the selected
    /// submission, so navigation is disabled.
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if an empty list is supplied, `NotInList` if
    /// the submission's id is absent from it.
    pub fn open(&mut self, submission: Submission, list: Option<Vec<Submission>>) -> Result<(), ReviewError> {
        let list = list.unwrap_or_else(|| vec![submission.clone()]);
        if list.is_empty() {
            return Err(ReviewError::EmptyList);
        }
        let index = list
            .iter()
            .position(|s| s.id == submission.id)
            .ok_or_else(|| ReviewError::NotInList(submission.id.clone()))?;

        debug!(id = %submission.id, index, len = list.len(), "review session opened");
        self.selected = Some(submission);
        self.list = list;
        self.index = Some(index);
        Ok(())
    }

    /// Close the session. Selection and list are cleared; the index goes
    /// back to its closed sentinel.
    pub fn close(&mut self) {
        self.selected = None;
        self.list.clear();
        self.index = None;
    }

    /// Step the selection one entry backward or forward. Stepping past
    /// either end is a clamped no-op that returns the current selection.
    ///
    /// # Errors
    ///
    /// Returns `Closed` when no session is open.
    pub fn navigate(&mut self, direction: Direction) -> Result<Submission, ReviewError> {
        let index = self.index.ok_or(ReviewError::Closed)?;
        let next = match direction {
            Direction::Prev => index.saturating_sub(1),
            Direction::Next => (index + 1).min(self.list.len() - 1),
        };
        self.index = Some(next);
        self.selected = Some(self.list[next].clone());
        Ok(self.list[next].clone())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Submission> {
        self.selected.as_ref()
    }

    /// Zero-based index of the selection, `-1` while closed.
    #[must_use]
    pub fn current_index(&self) -> isize {
        match self.index {
            Some(i) => isize::try_from(i).unwrap_or(isize::MAX),
            None => -1,
        }
    }

    /// `(index, list length)` for "N of M" chrome. `None` while closed.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.index.map(|i| (i, self.list.len()))
    }

    /// Navigation arrows are only useful over more than one entry.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.is_open() && self.list.len() > 1
    }

    /// Refresh the selection and the list snapshot from the store by id.
    /// Entries that have vanished from the store keep their snapshot copy,
    /// so positions never shift mid-session.
    pub async fn resync(&mut self, state: &ConsoleState) {
        if self.index.is_none() {
            return;
        }
        let inner = state.inner.read().await;
        for entry in &mut self.list {
            if let Some(current) = inner.submissions.iter().find(|s| s.id == entry.id) {
                *entry = current.clone();
            }
        }
        if let Some(selected) = &mut self.selected {
            if let Some(current) = inner.submissions.iter().find(|s| s.id == selected.id) {
                *selected = current.clone();
            }
        }
    }
}

// =============================================================================
// DETAIL VIEW
// =============================================================================

/// Everything the detail modal renders: the full unmasked record plus
/// chrome state. Approve/reject actions are offered only while the
/// submission is pending.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DetailView {
    pub submission: Submission,
    pub actions_enabled: bool,
    pub can_navigate: bool,
    /// Zero-based position within the session list.
    pub index: usize,
    pub total: usize,
}

impl DetailView {
    /// Build the modal contract from an open session.
    ///
    /// # Errors
    ///
    /// Returns `Closed` when no session is open.
    pub fn from_session(session: &ReviewSession) -> Result<Self, ReviewError> {
        let (index, total) = session.position().ok_or(ReviewError::Closed)?;
        let submission = session.selected().cloned().ok_or(ReviewError::Closed)?;
        Ok(Self {
            actions_enabled: submission.reward_status == RewardStatus::Pending,
            can_navigate: session.can_navigate(),
            index,
            total,
            submission,
        })
    }
}

// =============================================================================
// DECISION DRIVERS
// =============================================================================

/// Approve the selected submission, then close the session. An empty
/// comment is accepted.
///
/// # Errors
///
/// Returns `Closed` when no session is open; store errors pass through.
/// The session stays open on failure.
pub async fn approve_and_close(
    state: &ConsoleState,
    session: &mut ReviewSession,
    comment: impl Into<String>,
) -> Result<Submission, ReviewError> {
    let id = session.selected().map(|s| s.id.clone()).ok_or(ReviewError::Closed)?;
    let updated = submission::approve(state, &id, comment).await?;
    session.close();
    Ok(updated)
}

/// Reject the selected submission, then close the session.
///
/// # Errors
///
/// Returns `Closed` when no session is open; store errors pass through.
/// The session stays open on failure.
pub async fn reject_and_close(
    state: &ConsoleState,
    session: &mut ReviewSession,
    reason: impl Into<String>,
) -> Result<Submission, ReviewError> {
    let id = session.selected().map(|s| s.id.clone()).ok_or(ReviewError::Closed)?;
    let updated = submission::reject(state, &id, reason).await?;
    session.close();
    Ok(updated)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "review_test.rs"]
mod tests;
