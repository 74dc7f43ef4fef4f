// Ticket storage - repository trait and the bundled in-memory implementation
//
// The lifecycle engine only talks to storage through `TicketStore`, so a
// database-backed store can be swapped in without touching the engine.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::tickets::{AttachmentId, PositionId, Ticket, TicketId};

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage write rejected for ticket {id}: {reason}")]
    WriteRejected { id: TicketId, reason: String },

    #[error("no {kind} ids left to allocate")]
    IdsExhausted { kind: &'static str },
}

/// Repository capability consumed by the lifecycle engine
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, StoreError>;

    /// Insert or replace by ticket id
    async fn save(&self, ticket: &Ticket) -> Result<(), StoreError>;

    /// Returns whether a ticket was removed
    async fn delete(&self, id: TicketId) -> Result<bool, StoreError>;

    async fn list(&self) -> Result<Vec<Ticket>, StoreError>;

    async fn allocate_ticket_id(&self) -> Result<TicketId, StoreError>;

    async fn allocate_position_id(&self) -> Result<PositionId, StoreError>;

    async fn allocate_attachment_id(&self) -> Result<AttachmentId, StoreError>;
}

/// Monotonic id source; values are never handed out twice.
/// `u64::MAX` marks the counter as exhausted.
#[derive(Debug)]
struct IdCounter {
    kind: &'static str,
    next: AtomicU64,
}

impl IdCounter {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            next: AtomicU64::new(1),
        }
    }

    fn next(&self) -> Result<u64, StoreError> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < u64::MAX).then(|| n + 1)
            })
            .map_err(|_| StoreError::IdsExhausted { kind: self.kind })
    }

    /// Make sure future ids land strictly above `seen`
    fn advance_past(&self, seen: u64) {
        self.next.fetch_max(seen.saturating_add(1), Ordering::SeqCst);
    }
}

/// Ordered in-memory ticket table
#[derive(Debug)]
pub struct InMemoryTicketStore {
    tickets: RwLock<BTreeMap<TicketId, Ticket>>,
    ticket_ids: IdCounter,
    position_ids: IdCounter,
    attachment_ids: IdCounter,
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self {
            tickets: RwLock::new(BTreeMap::new()),
            ticket_ids: IdCounter::new("ticket"),
            position_ids: IdCounter::new("position"),
            attachment_ids: IdCounter::new("attachment"),
        }
    }

    /// Build a store pre-populated with existing tickets. Counters start above
    /// the highest ticket, position and attachment ids found.
    pub fn with_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let mut store = Self::new();
        let mut table = BTreeMap::new();

        for ticket in tickets {
            store.ticket_ids.advance_past(ticket.id);
            for position in &ticket.positions {
                store.position_ids.advance_past(position.id);
            }
            for attachment in &ticket.attachments {
                store.attachment_ids.advance_past(attachment.id);
            }
            table.insert(ticket.id, ticket);
        }

        debug!(seeded = table.len(), "Seeded in-memory ticket store");
        store.tickets = RwLock::new(table);
        store
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, StoreError> {
        Ok(self.tickets.read().await.get(&id).cloned())
    }

    async fn save(&self, ticket: &Ticket) -> Result<(), StoreError> {
        self.ticket_ids.advance_past(ticket.id);
        self.tickets.write().await.insert(ticket.id, ticket.clone());
        Ok(())
    }

    async fn delete(&self, id: TicketId) -> Result<bool, StoreError> {
        Ok(self.tickets.write().await.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Ticket>, StoreError> {
        Ok(self.tickets.read().await.values().cloned().collect())
    }

    async fn allocate_ticket_id(&self) -> Result<TicketId, StoreError> {
        self.ticket_ids.next()
    }

    async fn allocate_position_id(&self) -> Result<PositionId, StoreError> {
        self.position_ids.next()
    }

    async fn allocate_attachment_id(&self) -> Result<AttachmentId, StoreError> {
        self.attachment_ids.next()
    }
}
