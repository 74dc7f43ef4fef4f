use anyhow::{Context, Result};

use super::{print_json, Command};
use crate::tickets::{NewPosition, NewTicket, TicketId, TicketLifecycle, TicketStatus};

pub struct ListCommand {
    pub status: Option<String>,
}

impl Command for ListCommand {
    async fn execute(&self, lifecycle: &TicketLifecycle) -> Result<()> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<TicketStatus>)
            .transpose()
            .context("invalid --status")?;

        let tickets = lifecycle.list_tickets(status).await?;
        if tickets.is_empty() {
            println!("📋 No tickets found");
            return Ok(());
        }

        for ticket in &tickets {
            println!(
                "#{:<5} {:<12} {} ({} positions)",
                ticket.id,
                ticket.status.as_str(),
                ticket.title,
                ticket.positions.len()
            );
        }
        Ok(())
    }
}

pub struct ShowCommand {
    pub id: TicketId,
}

impl Command for ShowCommand {
    async fn execute(&self, lifecycle: &TicketLifecycle) -> Result<()> {
        let ticket = lifecycle.get_ticket(self.id).await?;
        print_json(&ticket)
    }
}

pub struct CreateCommand {
    pub new_ticket: NewTicket,
}

impl CreateCommand {
    pub fn new(
        title: String,
        department: Option<String>,
        tor: Option<u64>,
        positions: Vec<String>,
    ) -> Self {
        let positions = positions
            .into_iter()
            .map(|title| NewPosition {
                title,
                required_skills: Vec::new(),
                budget: None,
                description: String::new(),
            })
            .collect();

        Self {
            new_ticket: NewTicket {
                title,
                department,
                positions,
                attachments: Vec::new(),
                tor_template_id: tor,
            },
        }
    }
}

impl Command for CreateCommand {
    async fn execute(&self, lifecycle: &TicketLifecycle) -> Result<()> {
        let ticket = lifecycle.create_ticket(self.new_ticket.clone()).await?;
        eprintln!("✅ Created draft ticket #{}", ticket.id);
        print_json(&ticket)
    }
}
