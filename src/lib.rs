//! `branddesk` — in-process core of a brand-management console.
//!
//! ARCHITECTURE
//! ============
//! The console owns one canonical in-memory dataset: consumer purchase
//! submissions plus the supporting collections (products, campaigns, support
//! tickets, brand profile). [`state::ConsoleState`] is the single owner;
//! every mutation goes through a service function, updates records in place,
//! bumps the store version, and broadcasts a [`event::ConsoleEvent`] to
//! subscribed views. List views read filtered projections; the review modal
//! drives a caller-owned [`services::review::ReviewSession`].
//!
//! DESIGN
//! ======
//! - Collections are ordered `Vec`s: a status change must never reorder a
//!   list a view is currently rendering.
//! - Events notify, they do not carry state. Views re-read projections
//!   after each event.
//! - Errors are local control-flow outcomes (not found, closed session),
//!   never systemic failures. Nothing here crosses a process boundary.

pub mod config;
pub mod event;
pub mod mask;
pub mod record;
pub mod services;
pub mod state;
