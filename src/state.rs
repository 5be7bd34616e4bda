//! Shared console state.
//!
//! DESIGN
//! ======
//! `ConsoleState` is the single owner of the canonical dataset. Services
//! take it by reference, mutate records in place under the write lock, bump
//! the store version, and broadcast a [`ConsoleEvent`] to every subscriber.
//! Collections are ordered `Vec`s so a status change never reorders a list
//! a view is currently rendering. Subscribers are `mpsc` senders keyed by
//! id; broadcast is best-effort.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::config::ConsoleConfig;
use crate::event::{ConsoleEvent, EventKind};
use crate::record::{BrandProfile, Campaign, Product, Submission, Ticket};
use crate::services::handoff::HandoffSlot;

// =============================================================================
// INNER STATE
// =============================================================================

/// Canonical collections plus bookkeeping. Only reachable through the
/// [`ConsoleState`] lock; services never hand out references into it.
pub struct ConsoleInner {
    /// Ordered by arrival. Review mutations update in place.
    pub submissions: Vec<Submission>,
    pub products: Vec<Product>,
    pub campaigns: Vec<Campaign>,
    pub tickets: Vec<Ticket>,
    pub profile: BrandProfile,
    /// Bumped once per completed mutation.
    pub version: u64,
    /// Next numeric suffix for `SUB-NNN` ids. Never reused.
    pub next_submission_seq: u32,
    /// Next numeric suffix for `TKT-NNN` ids.
    pub next_ticket_seq: u32,
    /// Next numeric suffix for `CMP-NNN` ids.
    pub next_campaign_seq: u32,
    /// Subscribed views: subscriber id -> sender for outgoing events.
    pub subscribers: HashMap<Uuid, mpsc::Sender<ConsoleEvent>>,
}

impl ConsoleInner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            products: Vec::new(),
            campaigns: Vec::new(),
            tickets: Vec::new(),
            profile: BrandProfile::default(),
            version: 0,
            next_submission_seq: 1,
            next_ticket_seq: 1,
            next_campaign_seq: 1,
            subscribers: HashMap::new(),
        }
    }

    /// Take the next `SUB-NNN` id.
    pub fn next_submission_id(&mut self) -> String {
        let id = format!("SUB-{:03}", self.next_submission_seq);
        self.next_submission_seq += 1;
        id
    }

    /// Take the next `TKT-NNN` id.
    pub fn next_ticket_id(&mut self) -> String {
        let id = format!("TKT-{:03}", self.next_ticket_seq);
        self.next_ticket_seq += 1;
        id
    }

    /// Take the next `CMP-NNN` id.
    pub fn next_campaign_id(&mut self) -> String {
        let id = format!("CMP-{:03}", self.next_campaign_seq);
        self.next_campaign_seq += 1;
        id
    }
}

impl Default for ConsoleInner {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// CONSOLE STATE
// =============================================================================

/// Shared console state. Clone is cheap; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct ConsoleState {
    pub config: Arc<ConsoleConfig>,
    pub inner: Arc<RwLock<ConsoleInner>>,
    /// Cross-tab campaign handoff slot, TTL-bounded.
    pub handoff: HandoffSlot,
}

impl ConsoleState {
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        let handoff = HandoffSlot::new(config.handoff_ttl);
        Self { config: Arc::new(config), inner: Arc::new(RwLock::new(ConsoleInner::new())), handoff }
    }

    /// Current store version.
    pub async fn version(&self) -> u64 {
        self.inner.read().await.version
    }

    /// Register a view for event delivery. Returns the subscriber id and
    /// the receiving end of its channel.
    pub async fn subscribe(&self) -> (Uuid, mpsc::Receiver<ConsoleEvent>) {
        let (tx, rx) = mpsc::channel(self.config.event_queue_capacity);
        let id = Uuid::new_v4();
        let mut inner = self.inner.write().await;
        inner.subscribers.insert(id, tx);
        (id, rx)
    }

    /// Drop a subscriber. Unknown ids are ignored.
    pub async fn unsubscribe(&self, id: Uuid) {
        let mut inner = self.inner.write().await;
        inner.subscribers.remove(&id);
    }

    /// Broadcast an event at the current store version. Senders are
    /// snapshotted under the read lock and delivery happens after it is
    /// released, so a slow subscriber never blocks a writer.
    pub(crate) async fn publish(&self, kind: EventKind) {
        let (version, senders) = {
            let inner = self.inner.read().await;
            let senders: Vec<mpsc::Sender<ConsoleEvent>> = inner.subscribers.values().cloned().collect();
            (inner.version, senders)
        };
        let event = ConsoleEvent::new(kind, version);
        for tx in &senders {
            // Best-effort: if a subscriber's channel is full, skip it.
            let _ = tx.try_send(event.clone());
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// TESTS
// =============================================================================
