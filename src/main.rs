use anyhow::Result;
use clap::Parser;

use requisition_desk::cli::commands::float::FloatCommand;
use requisition_desk::cli::commands::lifecycle::{TransitionAction, TransitionCommand};
use requisition_desk::cli::commands::tickets::{CreateCommand, ListCommand, ShowCommand};
use requisition_desk::cli::commands::transitions::TransitionsCommand;
use requisition_desk::cli::commands::{load_lifecycle, show_how_to_get_started, Command};
use requisition_desk::cli::{Cli, Commands};
use requisition_desk::{config, init_telemetry, lifecycle_metrics, shutdown_telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return show_how_to_get_started();
    };

    if let Commands::Transitions = command {
        println!("{}", TransitionsCommand::render());
        return Ok(());
    }

    let config = config()?;
    init_telemetry(&config.observability)?;

    let result = tokio::runtime::Runtime::new()?.block_on(async {
        let lifecycle = load_lifecycle(config, cli.fixtures).await?;

        match command {
            Commands::Transitions => unreachable!("handled before fixtures are loaded"),
            Commands::List { status } => ListCommand { status }.execute(&lifecycle).await,
            Commands::Show { id } => ShowCommand { id }.execute(&lifecycle).await,
            Commands::Create { title, department, tor, positions } => {
                CreateCommand::new(title, department, tor, positions)
                    .execute(&lifecycle)
                    .await
            }
            Commands::Submit(args) => {
                TransitionCommand::new(TransitionAction::Submit, args).execute(&lifecycle).await
            }
            Commands::Validate(args) => {
                TransitionCommand::new(TransitionAction::Validate, args).execute(&lifecycle).await
            }
            Commands::Post(args) => {
                TransitionCommand::new(TransitionAction::Post, args).execute(&lifecycle).await
            }
            Commands::Start(args) => {
                TransitionCommand::new(TransitionAction::Start, args).execute(&lifecycle).await
            }
            Commands::Close(args) => {
                TransitionCommand::new(TransitionAction::Close, args).execute(&lifecycle).await
            }
            Commands::RecallDraft(args) => {
                TransitionCommand::new(TransitionAction::RecallToDraft, args)
                    .execute(&lifecycle)
                    .await
            }
            Commands::RecallSubmitted(args) => {
                TransitionCommand::new(TransitionAction::RecallToSubmitted, args)
                    .execute(&lifecycle)
                    .await
            }
            Commands::Float { id, agencies } => {
                FloatCommand::new(id, agencies).execute(&lifecycle).await
            }
        }
    });

    lifecycle_metrics().log_stats();
    shutdown_telemetry();
    result
}
