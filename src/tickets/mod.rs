// Ticket lifecycle - domain types, transition table and the engine that applies it

pub mod engine;
pub mod errors;
pub mod transitions;
pub mod types;

pub use engine::TicketLifecycle;
pub use errors::LifecycleError;
pub use transitions::{allowed_targets, is_allowed, is_allowed_str, is_terminal};
pub use types::*;
