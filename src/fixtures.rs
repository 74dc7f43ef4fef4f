// Seed data loading - static JSON snapshots of tickets, agencies and TOR templates

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::agencies::{Agency, InMemoryAgencyRoster};
use crate::identity::IdentityProvider;
use crate::store::InMemoryTicketStore;
use crate::tickets::{Ticket, TicketLifecycle};
use crate::tor::{InMemoryTorCatalog, TorTemplate};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} id {id} in fixtures")]
    DuplicateId { kind: &'static str, id: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub agencies: Vec<Agency>,
    #[serde(default)]
    pub tors: Vec<TorTemplate>,
}

impl Fixtures {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FixtureError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let fixtures = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            tickets = fixtures.tickets.len(),
            agencies = fixtures.agencies.len(),
            tors = fixtures.tors.len(),
            "Loaded fixtures"
        );
        Ok(fixtures)
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let fixtures: Fixtures = serde_json::from_str(raw)?;
        fixtures.check_unique_ids()?;
        Ok(fixtures)
    }

    fn check_unique_ids(&self) -> Result<(), FixtureError> {
        fn first_duplicate(ids: impl Iterator<Item = u64>) -> Option<u64> {
            let mut seen = std::collections::HashSet::new();
            ids.into_iter().find(|id| !seen.insert(*id))
        }

        let positions = self.tickets.iter().flat_map(|t| t.positions.iter().map(|p| p.id));
        let attachments = self.tickets.iter().flat_map(|t| t.attachments.iter().map(|a| a.id));

        let checks: [(&'static str, Option<u64>); 5] = [
            ("ticket", first_duplicate(self.tickets.iter().map(|t| t.id))),
            ("position", first_duplicate(positions)),
            ("attachment", first_duplicate(attachments)),
            ("agency", first_duplicate(self.agencies.iter().map(|a| a.id))),
            ("tor", first_duplicate(self.tors.iter().map(|t| t.id))),
        ];
        match checks.into_iter().find_map(|(kind, dup)| dup.map(|id| (kind, id))) {
            Some((kind, id)) => Err(FixtureError::DuplicateId { kind, id }),
            None => Ok(()),
        }
    }

    /// Wire the fixtures into in-memory collaborators behind a lifecycle engine
    pub fn into_lifecycle(self, identity: Arc<dyn IdentityProvider>) -> TicketLifecycle {
        TicketLifecycle::new(
            Arc::new(InMemoryTicketStore::with_tickets(self.tickets)),
            Arc::new(InMemoryAgencyRoster::new(self.agencies)),
            Arc::new(InMemoryTorCatalog::new(self.tors)),
            identity,
        )
    }
}
