//! Workspace automation for the channel directory service.
//!
//! Run through the `cargo xtask` alias defined in `.cargo/config.toml`.

use clap::Parser;

mod dynamodb;
mod prelude;

use prelude::aprintln;

/// Provision and maintain channel directory infrastructure
#[derive(Debug, Parser)]
#[command(name = "xtask", version, long_about = None)]
struct Cli {
    #[command(flatten)]
    output: Output,

    #[command(subcommand)]
    task: Task,
}

/// How chatty a task is.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Output {
    /// Print nothing but errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Also print the table description read from DynamoDB
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Output {
    /// Prints a progress line unless `--quiet`.
    pub fn say(&self, line: impl std::fmt::Display) {
        if !self.quiet {
            aprintln!("{line}");
        }
    }

    /// Prints a diagnostic line only with `--verbose`.
    pub fn detail(&self, line: impl std::fmt::Display) {
        if self.verbose {
            aprintln!("{line}");
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Task {
    /// Provision the notification channel table
    Dynamodb(dynamodb::DynamodbCommand),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.task {
        Task::Dynamodb(command) => dynamodb::run(command, cli.output).await?,
    }

    Ok(())
}
