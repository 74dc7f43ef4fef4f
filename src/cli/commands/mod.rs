use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::RequisitionDeskConfig;
use crate::fixtures::Fixtures;
use crate::identity::StaticIdentity;
use crate::observability::lifecycle_metrics;
use crate::tickets::TicketLifecycle;

pub mod float;
pub mod lifecycle;
pub mod tickets;
pub mod transitions;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self, lifecycle: &TicketLifecycle) -> Result<()>;
}

/// Build an engine over the fixture file, falling back to the configured path
pub async fn load_lifecycle(
    config: &RequisitionDeskConfig,
    fixtures: Option<PathBuf>,
) -> Result<TicketLifecycle> {
    let path = fixtures.unwrap_or_else(|| PathBuf::from(&config.fixtures.path));
    let fixtures = Fixtures::load(&path)
        .await
        .with_context(|| format!("could not seed tickets from {}", path.display()))?;
    let identity = Arc::new(StaticIdentity::new(config.workflow.default_actor.clone()));
    Ok(fixtures
        .into_lifecycle(identity)
        .with_metrics(lifecycle_metrics()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn show_how_to_get_started() -> Result<()> {
    println!("📋 Requisition Desk - ticket lifecycle");
    println!();
    println!("Inspect:");
    println!("  🗺️  reqdesk transitions          # Allowed status moves");
    println!("  📄 reqdesk list [--status S]    # Tickets in the fixture file");
    println!("  🔎 reqdesk show <id>            # One ticket as JSON");
    println!();
    println!("Move a ticket:");
    println!("  ➡️  reqdesk submit|validate|post|start|close <id> [--actor NAME]");
    println!("  ↩️  reqdesk recall-draft|recall-submitted <id> [--actor NAME]");
    println!("  📣 reqdesk float <id> --agency 1 --agency 2");
    println!();
    println!("💡 Point at your own data with --fixtures path/to/file.json");
    Ok(())
}
