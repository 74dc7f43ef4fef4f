use thiserror::Error;

use super::types::{TicketId, TicketStatus, TorId};
use crate::store::StoreError;

/// Errors surfaced by the ticket lifecycle engine
///
/// Every variant is terminal for the operation that produced it. The stored
/// ticket is left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("ticket {id} not found")]
    NotFound { id: TicketId },

    #[error("ticket {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: TicketId,
        from: TicketStatus,
        to: TicketStatus,
    },

    #[error("TOR template {id} not found")]
    TorNotFound { id: TorId },

    #[error("ticket store error: {0}")]
    Store(#[from] StoreError),
}

impl LifecycleError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LifecycleError::NotFound { .. })
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, LifecycleError::InvalidTransition { .. })
    }
}
