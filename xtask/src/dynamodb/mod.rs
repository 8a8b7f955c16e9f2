//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use consultants::config::Config;
use consultants::storage::DynamoDbRepository;
use dialoguer::Confirm;

use crate::prelude::*;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),

    /// Seed the table with mock consultants.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates the consultants DynamoDB table, keyed by
the `email` attribute with no sort key and on-demand billing. An existing
table with a different key schema is reported and left untouched.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials
  TABLE_NAME          - Default for --table-name")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating/updating.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, env = "TABLE_NAME", default_value = "consultants")]
    pub table_name: String,
}

/// Seed the table with mock consultants.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert mock consultants into DynamoDB.

Consultants are deterministic (same count, same emails) and go through the
same conditional insert the API uses, so emails that are already present
are skipped rather than overwritten.")]
pub struct SeedCommand {
    /// Number of consultants to generate.
    #[arg(long, default_value = "10")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, env = "TABLE_NAME", default_value = "consultants")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let config = Config::from_env();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), client::target_display(&config));
        aprintln!();
    }

    let dynamo_client = client::create_client(&config).await;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        // Destroy flow
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
                .default(false)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        // Deploy flow
        let table_config = config::consultants_table_config().with_table_name(&cmd.table_name);

        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('-') {
                    aprintln!("  {}", p_r(&line));
                } else if line.starts_with('~') {
                    aprintln!("  {}", p_y(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        match plan {
            planning::DeployPlan::NoChanges { .. } => {
                if !global.is_silent() {
                    aprintln!("{}", p_g("Infrastructure is up to date."));
                }
                return Ok(());
            }
            planning::DeployPlan::KeySchemaMismatch { .. } => {
                return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
            }
            planning::DeployPlan::CreateTable { .. } => {}
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let mut config = Config::from_env();
    config.table_name = cmd.table_name;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), client::target_display(&config));
        aprintln!("{} {}", p_b("Table:"), config.table_name);
        aprintln!("{} {}", p_b("Consultant count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = client::create_client(&config).await;

    // Verify table exists
    if client::get_table_state(&dynamo_client, &config.table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: config.table_name,
        });
    }

    let consultants = seed::seed_consultants(cmd.count);

    if !global.is_silent() {
        aprintln!("{}", p_c("Consultants to create:"));
        for consultant in consultants.iter().take(5) {
            aprintln!("  {}", seed::format_consultant(consultant));
        }
        if consultants.len() > 5 {
            aprintln!("  ... and {} more", consultants.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} consultants?", consultants.len()))
            .default(true)
            .interact()
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    let repository = DynamoDbRepository::new(dynamo_client, config.table_name);
    let report = seed::insert_consultants(&repository, &consultants).await?;

    if !global.is_silent() {
        aprintln!(
            "{} {} consultants inserted, {} already present.",
            p_g("Success:"),
            report.inserted,
            report.skipped
        );
    }

    Ok(())
}
