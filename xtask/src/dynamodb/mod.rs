//! `cargo xtask dynamodb`: provisioning for the notification channel table.

mod client;
mod config;
mod deploy;
mod error;
mod planning;

pub use error::{DynamodbError, Result};

use aws_sdk_dynamodb::Client;
use dialoguer::Confirm;

use crate::prelude::*;
use crate::Output;
use planning::{DeployPlan, DestroyPlan, TableState};

#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Create (or with --destroy, delete) the notification channel table.
    Deploy(DeployCommand),
}

#[derive(Debug, clap::Parser)]
#[command(long_about = "Create or delete the table that stores notification channels.

The table uses a string partition key `pk` (USER#<userId>) and a string sort
key `sk` (NOTIFICATION#<channelType>) with on-demand billing. An existing
table with those keys is left alone; one with different keys is reported
and never modified.

Reads AWS_ENDPOINT_URL to target a local DynamoDB, AWS_REGION (us-east-1
when unset) and the usual AWS credential chain.")]
pub struct DeployCommand {
    /// Apply without asking for confirmation.
    #[arg(long)]
    pub force: bool,

    /// Delete the table and every channel stored in it.
    #[arg(long)]
    pub destroy: bool,

    /// Name of the table the server reads and writes.
    #[arg(
        long,
        default_value = config::DEFAULT_TABLE_NAME,
        env = "NOTIFICATION_CHANNEL_TABLE_NAME"
    )]
    pub table_name: String,
}

pub async fn run(command: DynamodbCommand, output: Output) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy) => run_deploy(deploy, output).await,
    }
}

async fn run_deploy(cmd: DeployCommand, output: Output) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    output.say(format!(
        "{} {} / {}\n",
        p_b("DynamoDB:"),
        aws_config.target_display(),
        cmd.table_name
    ));

    let dynamo = client::create_client(&aws_config).await;
    let existing = client::get_table_state(&dynamo, &cmd.table_name).await?;
    output.detail(format!("{} {:?}", p_m("Described:"), existing));

    if cmd.destroy {
        destroy_table(&dynamo, existing.as_ref(), &cmd, output).await
    } else {
        provision_table(&dynamo, existing.as_ref(), &cmd, output).await
    }
}

/// Asks before a change unless `--force` was given.
fn confirm_or_cancel(force: bool, prompt: &str, default: bool) -> Result<()> {
    if force || Confirm::new().with_prompt(prompt).default(default).interact()? {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn provision_table(
    dynamo: &Client,
    existing: Option<&TableState>,
    cmd: &DeployCommand,
    output: Output,
) -> Result<()> {
    let desired = config::notification_channel_table_config().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(existing, &desired);

    for line in planning::format_deploy_plan(&plan) {
        let painted = match line.chars().next() {
            Some('+') => p_g(&line),
            Some('!') => p_r(&line),
            _ => line,
        };
        output.say(format!("  {painted}"));
    }
    output.say("");

    match &plan {
        DeployPlan::NoChanges { table_name } => {
            output.say(p_g(&format!("Table '{table_name}' already matches.")));
            Ok(())
        }
        DeployPlan::KeySchemaMismatch { .. } => deploy::execute_deploy_plan(dynamo, &plan).await,
        DeployPlan::CreateTable { config } => {
            confirm_or_cancel(cmd.force, "Create this table?", true)?;
            output.say(p_b("Creating table and waiting for it to become ACTIVE..."));
            deploy::execute_deploy_plan(dynamo, &plan).await?;
            output.say(p_g(&format!("Table '{}' is ready.", config.table_name)));
            Ok(())
        }
    }
}

async fn destroy_table(
    dynamo: &Client,
    existing: Option<&TableState>,
    cmd: &DeployCommand,
    output: Output,
) -> Result<()> {
    let plan = planning::calculate_destroy_plan(existing, &cmd.table_name);

    for line in planning::format_destroy_plan(&plan) {
        output.say(format!("  {}", p_r(&line)));
    }
    output.say("");

    if let DestroyPlan::AlreadyGone { .. } = plan {
        return Ok(());
    }

    confirm_or_cancel(
        cmd.force,
        &format!(
            "Delete '{}' and every notification channel in it?",
            cmd.table_name
        ),
        false,
    )?;

    deploy::execute_destroy_plan(dynamo, &plan).await?;
    output.say(p_g(&format!("Table '{}' deleted.", cmd.table_name)));
    Ok(())
}
