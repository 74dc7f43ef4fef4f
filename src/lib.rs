// Requisition Desk Library - contractor requisition ticket lifecycle
// Exposes the lifecycle engine, its collaborators and the CLI plumbing

pub mod agencies;
pub mod cli;
pub mod config;
pub mod fixtures;
pub mod identity;
pub mod observability;
pub mod store;
pub mod telemetry;
pub mod tickets;
pub mod tor;

// Re-export key types for easy access
pub use agencies::{Agency, AgencyRoster, InMemoryAgencyRoster};
pub use config::{config, RequisitionDeskConfig};
pub use fixtures::{FixtureError, Fixtures};
pub use identity::{Clock, FixedClock, IdentityProvider, StaticIdentity, SystemClock};
pub use observability::{lifecycle_metrics, LifecycleMetrics, LifecycleStats, OperationTimer};
pub use store::{InMemoryTicketStore, StoreError, TicketStore};
pub use telemetry::{create_lifecycle_span, generate_correlation_id, init_telemetry, shutdown_telemetry};
pub use tickets::{
    FloatOutcome, LifecycleError, NewTicket, Ticket, TicketId, TicketLifecycle, TicketStatus,
    WorkflowRecord,
};
pub use tor::{InMemoryTorCatalog, TorCatalog, TorTemplate};
