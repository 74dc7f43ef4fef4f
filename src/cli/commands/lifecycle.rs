use anyhow::Result;

use super::{print_json, Command};
use crate::cli::TransitionArgs;
use crate::tickets::{LifecycleError, Ticket, TicketLifecycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    Submit,
    Validate,
    Post,
    Start,
    Close,
    RecallToDraft,
    RecallToSubmitted,
}

pub struct TransitionCommand {
    pub action: TransitionAction,
    pub args: TransitionArgs,
}

impl TransitionCommand {
    pub fn new(action: TransitionAction, args: TransitionArgs) -> Self {
        Self { action, args }
    }

    pub async fn apply(&self, lifecycle: &TicketLifecycle) -> Result<Ticket, LifecycleError> {
        let id = self.args.id;
        let actor = self.args.actor.as_deref();
        match self.action {
            TransitionAction::Submit => lifecycle.submit(id, actor).await,
            TransitionAction::Validate => lifecycle.validate(id, actor).await,
            TransitionAction::Post => lifecycle.post(id, actor).await,
            TransitionAction::Start => lifecycle.start(id, actor).await,
            TransitionAction::Close => lifecycle.close(id, actor).await,
            TransitionAction::RecallToDraft => lifecycle.recall_to_draft(id, actor).await,
            TransitionAction::RecallToSubmitted => lifecycle.recall_to_submitted(id, actor).await,
        }
    }
}

impl Command for TransitionCommand {
    async fn execute(&self, lifecycle: &TicketLifecycle) -> Result<()> {
        match self.apply(lifecycle).await {
            Ok(ticket) => {
                eprintln!("✅ Ticket #{} is now {}", ticket.id, ticket.status);
                print_json(&ticket)
            }
            Err(e @ LifecycleError::InvalidTransition { .. }) => {
                eprintln!("❌ {e}");
                eprintln!("   💡 Run 'reqdesk transitions' to see the allowed moves");
                Err(e.into())
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Err(e.into())
            }
        }
    }
}
