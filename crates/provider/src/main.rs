//! Terraform provider for Splunk Enterprise - plugin entry point.
//!
//! Responsibilities:
//! - Parse command-line arguments and install logging.
//! - Print provider and resource schemas for the host.
//! - Run a single resource operation: request JSON on stdin, response JSON on stdout.
//!
//! Invariants:
//! - Logs go to stderr only; stdout carries nothing but the JSON response.
//! - Failures exit with a code from [`ExitCode`].

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use terraform_provider_splunk::exit_code::{ExitCode, exit_code_for};
use terraform_provider_splunk::host::{self, OperationRequest, ResourceOperation};
use terraform_provider_splunk::logging::{self, LogFormat};
use terraform_provider_splunk::{Schema, SplunkProvider};

#[derive(Parser)]
#[command(name = "terraform-provider-splunk", version, about)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, env = "SPLUNK_PROVIDER_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the provider and resource schemas as JSON
    Schema,
    /// List the supported resource types
    Resources,
    /// Run one resource operation
    Run {
        /// Resource type, e.g. splunk_indexes
        resource_type: String,
        #[arg(value_enum)]
        operation: ResourceOperation,
        /// Read the request from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_format) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    if let Err(e) = run_command(cli.command).await {
        tracing::error!(error = %e, "Provider operation failed");
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e).as_i32());
    }
}

async fn run_command(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Schema => {
            let provider = SplunkProvider::new();
            let resources: BTreeMap<&str, Schema> = provider.resource_schemas();
            let schemas = json!({
                "provider": SplunkProvider::schema(),
                "resource_schemas": resources,
            });
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
        Command::Resources => {
            for type_name in SplunkProvider::new().resource_types() {
                println!("{type_name}");
            }
        }
        Command::Run {
            resource_type,
            operation,
            input,
        } => {
            let raw = match input {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read request from {}", path.display()))?,
                None => {
                    let mut raw = String::new();
                    std::io::stdin()
                        .read_to_string(&mut raw)
                        .context("Failed to read request from stdin")?;
                    raw
                }
            };
            let request: OperationRequest =
                serde_json::from_str(&raw).context("Failed to parse operation request")?;

            let response = host::execute(&resource_type, operation, request).await?;
            println!("{}", serde_json::to_string(&response)?);
        }
    }
    Ok(())
}
