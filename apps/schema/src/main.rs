use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_schema::check::{check_file, check_source, EntityKind, Report};
use resume_schema::{all_enumerations, SchemaConfig};

#[derive(Parser)]
#[command(name = "schema-check", version, about = "Validate resume-domain JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate documents as ENTITY. Reads standard input when no file is given.
    Check {
        #[arg(value_enum)]
        entity: EntityKind,
        files: Vec<PathBuf>,
        /// Reject salary ranges whose min exceeds max.
        #[arg(long)]
        enforce_salary_order: bool,
    },
    /// List every enumeration and its members.
    Enums {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every checked document was valid.
fn run(cli: Cli) -> Result<bool> {
    let mut config = SchemaConfig::from_env()?;

    // Logs go to stderr; stdout carries findings only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "resume_schema={0},schema_check={0}",
                &config.log_filter
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("schema-check v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Enums { json } => {
            let catalog = all_enumerations();
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for info in catalog {
                    println!("{}: {}", info.name, info.members.join(", "));
                }
            }
            Ok(true)
        }
        Command::Check {
            entity,
            files,
            enforce_salary_order,
        } => {
            config.enforce_salary_order |= enforce_salary_order;
            let mut report = Report::default();

            if files.is_empty() {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read standard input")?;
                check_source(entity, "<stdin>", &text, &config, &mut report);
            } else {
                for path in &files {
                    check_file(entity, path, &config, &mut report)?;
                }
            }

            for finding in &report.findings {
                println!("{finding}");
            }
            info!(
                "{} document(s) checked as {}, {} invalid",
                report.documents,
                entity.name(),
                report.invalid
            );
            Ok(report.is_clean())
        }
    }
}
