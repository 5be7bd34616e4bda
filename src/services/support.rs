//! Support ticket service.
//!
//! Lifecycle is strictly `Open -> InProgress -> Resolved`. Resolving is
//! allowed straight from `Open`; every other repeat or backward move is
//! rejected.

use tracing::info;

use crate::event::EventKind;
use crate::record::{Ticket, TicketPriority, TicketStatus};
use crate::state::ConsoleState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("ticket not found: {0}")]
    NotFound(String),
    #[error("ticket subject is empty")]
    EmptySubject,
    #[error("ticket {id} is {from:?}, transition refused")]
    InvalidTransition { id: String, from: TicketStatus },
}

impl crate::event::ErrorCode for TicketError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_TICKET_NOT_FOUND",
            Self::EmptySubject => "E_TICKET_EMPTY_SUBJECT",
            Self::InvalidTransition { .. } => "E_TICKET_INVALID_TRANSITION",
        }
    }
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Open a new ticket.
///
/// # Errors
///
/// Returns `EmptySubject` if the subject is blank.
pub async fn open_ticket(
    state: &ConsoleState,
    subject: impl Into<String>,
    customer_name: impl Into<String>,
    priority: TicketPriority,
) -> Result<Ticket, TicketError> {
    let subject = subject.into();
    if subject.trim().is_empty() {
        return Err(TicketError::EmptySubject);
    }

    let ticket = {
        let mut inner = state.inner.write().await;
        let ticket = Ticket {
            id: inner.next_ticket_id(),
            subject,
            customer_name: customer_name.into(),
            priority,
            status: TicketStatus::Open,
            opened_ts: crate::event::now_ms(),
        };
        inner.tickets.push(ticket.clone());
        inner.version += 1;
        ticket
    };

    info!(id = %ticket.id, "ticket opened");
    state
        .publish(EventKind::TicketOpened { ticket_id: ticket.id.clone() })
        .await;
    Ok(ticket)
}

/// Move an open ticket into progress.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `InvalidTransition` unless the
/// ticket is currently open.
pub async fn start(state: &ConsoleState, id: &str) -> Result<Ticket, TicketError> {
    transition(state, id, TicketStatus::InProgress, |from| from == TicketStatus::Open).await
}

/// Resolve a ticket, from either open or in-progress.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `InvalidTransition` if the
/// ticket is already resolved.
pub async fn resolve(state: &ConsoleState, id: &str) -> Result<Ticket, TicketError> {
    transition(state, id, TicketStatus::Resolved, |from| from != TicketStatus::Resolved).await
}

async fn transition(
    state: &ConsoleState,
    id: &str,
    to: TicketStatus,
    allowed: impl Fn(TicketStatus) -> bool,
) -> Result<Ticket, TicketError> {
    let updated = {
        let mut inner = state.inner.write().await;
        let pos = inner
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TicketError::NotFound(id.to_string()))?;

        let ticket = &mut inner.tickets[pos];
        if !allowed(ticket.status) {
            return Err(TicketError::InvalidTransition { id: id.to_string(), from: ticket.status });
        }
        ticket.status = to;
        let updated = ticket.clone();
        inner.version += 1;
        updated
    };

    info!(id = %updated.id, status = ?updated.status, "ticket transitioned");
    state
        .publish(EventKind::TicketUpdated { ticket_id: updated.id.clone() })
        .await;
    Ok(updated)
}

// =============================================================================
// READ SIDE
// =============================================================================

/// All tickets in opening order.
pub async fn list(state: &ConsoleState) -> Vec<Ticket> {
    let inner = state.inner.read().await;
    inner.tickets.clone()
}

/// Tickets currently in the given status, in opening order.
pub async fn list_by_status(state: &ConsoleState, status: TicketStatus) -> Vec<Ticket> {
    let inner = state.inner.read().await;
    inner
        .tickets
        .iter()
        .filter(|t| t.status == status)
        .cloned()
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ErrorCode;
    use crate::state::test_helpers::test_state;

    #[tokio::test]
    async fn open_assigns_sequential_ids() {
        let state = test_state();
        let first = open_ticket(&state, "Reward code not received", "Rohan Mehta", TicketPriority::High)
            .await
            .expect("open");
        let second = open_ticket(&state, "QR sticker damaged", "Priya Shah", TicketPriority::Low)
            .await
            .expect("open");

        assert_eq!(first.id, "TKT-001");
        assert_eq!(second.id, "TKT-002");
        assert_eq!(first.status, TicketStatus::Open);
        assert!(first.opened_ts > 0);
    }

    #[tokio::test]
    async fn open_rejects_blank_subject() {
        let state = test_state();
        let err = open_ticket(&state, "  ", "Anyone", TicketPriority::Medium)
            .await
            .expect_err("blank");
        assert!(matches!(err, TicketError::EmptySubject));
    }

    #[tokio::test]
    async fn lifecycle_open_start_resolve() {
        let state = test_state();
        let ticket = open_ticket(&state, "Cashback pending", "Rohan", TicketPriority::Medium)
            .await
            .expect("open");

        let started = start(&state, &ticket.id).await.expect("start");
        assert_eq!(started.status, TicketStatus::InProgress);

        let resolved = resolve(&state, &ticket.id).await.expect("resolve");
        assert_eq!(resolved.status, TicketStatus::Resolved);
    }

    #[tokio::test]
    async fn resolve_straight_from_open() {
        let state = test_state();
        let ticket = open_ticket(&state, "Wrong product listed", "Priya", TicketPriority::Low)
            .await
            .expect("open");
        let resolved = resolve(&state, &ticket.id).await.expect("resolve");
        assert_eq!(resolved.status, TicketStatus::Resolved);
    }

    #[tokio::test]
    async fn resolving_resolved_ticket_errors() {
        let state = test_state();
        let ticket = open_ticket(&state, "Duplicate reward", "Amit", TicketPriority::High)
            .await
            .expect("open");
        resolve(&state, &ticket.id).await.expect("resolve");

        let err = resolve(&state, &ticket.id).await.expect_err("already resolved");
        assert!(matches!(err, TicketError::InvalidTransition { from: TicketStatus::Resolved, .. }));
        assert_eq!(err.error_code(), "E_TICKET_INVALID_TRANSITION");
    }

    #[tokio::test]
    async fn start_requires_open() {
        let state = test_state();
        let ticket = open_ticket(&state, "App crash on scan", "Neha", TicketPriority::High)
            .await
            .expect("open");
        start(&state, &ticket.id).await.expect("start");

        let err = start(&state, &ticket.id).await.expect_err("already started");
        assert!(matches!(err, TicketError::InvalidTransition { from: TicketStatus::InProgress, .. }));
    }

    #[tokio::test]
    async fn unknown_ticket_errors() {
        let state = test_state();
        let err = start(&state, "TKT-404").await.expect_err("missing");
        assert!(matches!(err, TicketError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_by_status_filters_in_order() {
        let state = test_state();
        open_ticket(&state, "A", "x", TicketPriority::Low).await.expect("open");
        let b = open_ticket(&state, "B", "y", TicketPriority::Low).await.expect("open");
        open_ticket(&state, "C", "z", TicketPriority::Low).await.expect("open");
        resolve(&state, &b.id).await.expect("resolve");

        let open = list_by_status(&state, TicketStatus::Open).await;
        let ids: Vec<&str> = open.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["TKT-001", "TKT-003"]);
        assert_eq!(list_by_status(&state, TicketStatus::Resolved).await.len(), 1);
        assert_eq!(list(&state).await.len(), 3);
    }
}
