//! Cross-tab campaign handoff slot.
//!
//! DESIGN
//! ======
//! A process-wide, single-occupancy slot: the audience tab stashes a
//! pre-filled campaign request, the campaign tab takes it. `stash`
//! overwrites whatever is present, `take` consumes, `peek` observes.
//! Entries older than the TTL are dropped on access, so an abandoned
//! handoff never resurfaces hours later.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::event::now_ms;

// =============================================================================
// TYPES
// =============================================================================

/// A campaign request staged for the campaign tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCampaign {
    pub audiences: Vec<String>,
    pub is_paid: bool,
    /// Milliseconds since Unix epoch, set at stash time.
    pub ts: i64,
}

struct Stored {
    pending: PendingCampaign,
    stashed_at: Instant,
}

/// TTL-bounded single-occupancy slot. Clone shares the slot.
#[derive(Clone)]
pub struct HandoffSlot {
    inner: Arc<Mutex<Option<Stored>>>,
    ttl: Duration,
}

// =============================================================================
// SLOT
// =============================================================================

impl HandoffSlot {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(None)), ttl }
    }

    /// Stage a campaign request, replacing any current occupant.
    pub fn stash(&self, audiences: Vec<String>, is_paid: bool) {
        self.stash_at(audiences, is_paid, Instant::now());
    }

    /// Consume the staged request, leaving the slot empty.
    pub fn take(&self) -> Option<PendingCampaign> {
        self.take_at(Instant::now())
    }

    /// Observe the staged request without consuming it.
    pub fn peek(&self) -> Option<PendingCampaign> {
        self.peek_at(Instant::now())
    }

    /// Internal: stash with explicit timestamp (for testing).
    fn stash_at(&self, audiences: Vec<String>, is_paid: bool, now: Instant) {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Stored {
            pending: PendingCampaign { audiences, is_paid, ts: now_ms() },
            stashed_at: now,
        });
    }

    fn take_at(&self, now: Instant) -> Option<PendingCampaign> {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let stored = slot.take()?;
        if now.duration_since(stored.stashed_at) > self.ttl {
            tracing::debug!(age_secs = now.duration_since(stored.stashed_at).as_secs(), "expired handoff dropped");
            return None;
        }
        Some(stored.pending)
    }

    fn peek_at(&self, now: Instant) -> Option<PendingCampaign> {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match &*slot {
            Some(stored) if now.duration_since(stored.stashed_at) > self.ttl => {
                *slot = None;
                None
            }
            Some(stored) => Some(stored.pending.clone()),
            None => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "handoff_test.rs"]
mod tests;
