use anyhow::Result;
use std::collections::BTreeSet;

use super::{print_json, Command};
use crate::tickets::{AgencyId, TicketId, TicketLifecycle};

pub struct FloatCommand {
    pub id: TicketId,
    pub agencies: BTreeSet<AgencyId>,
}

impl FloatCommand {
    pub fn new(id: TicketId, agencies: impl IntoIterator<Item = AgencyId>) -> Self {
        Self {
            id,
            agencies: agencies.into_iter().collect(),
        }
    }
}

impl Command for FloatCommand {
    async fn execute(&self, lifecycle: &TicketLifecycle) -> Result<()> {
        let outcome = lifecycle.float_to_agencies(self.id, &self.agencies).await?;

        if outcome.floated_to.is_empty() {
            eprintln!("⚠️  No active agencies matched; nothing was floated");
        } else {
            eprintln!(
                "📣 Ticket #{} floated to: {}",
                self.id,
                outcome.floated_to.join(", ")
            );
        }
        print_json(&outcome)
    }
}
