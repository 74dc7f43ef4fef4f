use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. JSON output carries the
/// current span and span list so correlation ids travel with every event.
pub fn init_telemetry(observability: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&observability.log_level))?;

    if observability.json_logs {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init()?;
    }

    tracing::debug!("Requisition desk telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span wrapping a single lifecycle operation on one ticket
pub fn create_lifecycle_span(
    operation: &str,
    ticket_id: Option<u64>,
    correlation_id: &str,
) -> tracing::Span {
    tracing::info_span!(
        "ticket_lifecycle",
        operation = operation,
        ticket.id = ticket_id,
        correlation.id = correlation_id,
        otel.kind = "internal"
    )
}

pub fn shutdown_telemetry() {
    tracing::debug!("Requisition desk telemetry shutdown complete");
}
