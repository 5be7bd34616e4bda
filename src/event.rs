//! `ConsoleEvent` — the universal change notification for `branddesk`.
//!
//! DESIGN
//! ======
//! - Events notify, they never carry record state. A view that receives one
//!   re-reads the projection it renders.
//! - `version` is the store version after the mutation that produced the
//!   event, so a subscriber can detect missed events by gap.
//! - Error codes are grepable `E_*` strings exposed through [`ErrorCode`];
//!   every service error enum implements it.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for service errors.
///
/// Nothing in this crate crosses a process boundary, so `retryable` is
/// false for every error; the hook exists so embedding callers can route
/// errors uniformly.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// TIME
// =============================================================================

/// Current time as milliseconds since Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

// =============================================================================
// EVENTS
// =============================================================================

/// What changed. Ids identify the affected record; payloads stay out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    SubmissionReceived { submission_id: String },
    SubmissionApproved { submission_id: String },
    SubmissionRejected { submission_id: String },
    CampaignDrafted { campaign_id: String },
    CampaignLaunched { campaign_id: String },
    TicketOpened { ticket_id: String },
    TicketUpdated { ticket_id: String },
    ProfileUpdated,
}

/// One change notification, broadcast to every subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleEvent {
    pub id: Uuid,
    /// Milliseconds since Unix epoch. Set at construction.
    pub ts: i64,
    /// Store version after the mutation that produced this event.
    pub version: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ConsoleEvent {
    #[must_use]
    pub fn new(kind: EventKind, version: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: now_ms(),
            version,
            kind,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
