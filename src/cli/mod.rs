use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "reqdesk")]
#[command(about = "Requisition ticket lifecycle desk")]
#[command(long_about = "Drive contractor requisition tickets through draft, submission, validation, \
                       posting, work and closure, and float open requisitions to staffing agencies. \
                       Tickets are loaded from a JSON fixture file; changes live for one command only.")]
pub struct Cli {
    /// Fixture file to load (overrides the configured path)
    #[arg(long, global = true, help = "Path to a JSON fixture file with tickets, agencies and TOR templates")]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct TransitionArgs {
    /// Ticket identifier
    pub id: u64,
    /// Acting party recorded on the workflow stamp
    #[arg(long, help = "Name recorded as the actor (defaults to the configured identity)")]
    pub actor: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the status transition table
    Transitions,
    /// List tickets, optionally filtered by status
    List {
        #[arg(long, help = "Only show tickets in this status (draft, submitted, validated, posted, in_progress, closed)")]
        status: Option<String>,
    },
    /// Show one ticket as JSON
    Show {
        id: u64,
    },
    /// Create a draft ticket
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        department: Option<String>,
        /// TOR template to copy onto the ticket
        #[arg(long)]
        tor: Option<u64>,
        /// Position titles, one per flag
        #[arg(long = "position")]
        positions: Vec<String>,
    },
    /// draft -> submitted
    Submit(TransitionArgs),
    /// submitted -> validated
    Validate(TransitionArgs),
    /// validated -> posted
    Post(TransitionArgs),
    /// posted -> in_progress
    Start(TransitionArgs),
    /// in_progress -> closed
    Close(TransitionArgs),
    /// submitted -> draft
    RecallDraft(TransitionArgs),
    /// validated -> submitted
    RecallSubmitted(TransitionArgs),
    /// Notify active agencies about an open requisition
    Float {
        id: u64,
        #[arg(long = "agency", required = true, help = "Agency id to notify; repeat for several")]
        agencies: Vec<u64>,
    },
}
