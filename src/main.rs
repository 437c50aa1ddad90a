use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use brevo_tour::config::Settings;
use brevo_tour::executor::ApiClient;
use brevo_tour::runner::{
    print_summary, run_catalogue, run_one, RunOptions, UseCase, CATALOGUE, EXTRAS,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "brevo-tour",
    version,
    about = "Use-case runner for the Brevo API",
    disable_help_subcommand = true
)]
struct Cli {
    /// Run a single use case by name (e.g. account, email-html)
    #[arg(value_name = "USE_CASE")]
    use_case: Option<String>,

    /// Include email/SMS sends (skipped by default)
    #[arg(long)]
    send: bool,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(short, long)]
    env: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available use cases
    List,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(Commands::List) = &cli.command {
        print_use_cases();
        return Ok(ExitCode::SUCCESS);
    }

    let settings = Settings::load(cli.env.as_deref()).context("loading configuration")?;
    let client = ApiClient::new(&settings).context("building API client")?;
    let options = RunOptions {
        skip_sends: !cli.send,
    };

    match &cli.use_case {
        Some(slug) => {
            let Some(use_case) = UseCase::from_slug(slug) else {
                bail!("unknown use case {slug:?}; run `brevo-tour list` to see the names");
            };
            run_one(use_case, &client, &settings, &options).await;
        }
        None => {
            let report = run_catalogue(&client, &settings, &options).await;
            print_summary(&report);
        }
    }

    // Individual failures are reported above; the run itself succeeded.
    Ok(ExitCode::SUCCESS)
}

fn print_use_cases() {
    println!("Catalogue (run in this order):");
    for use_case in CATALOGUE {
        println!("  {:<20} {}", use_case.slug(), use_case.label());
    }
    println!("\nOn request only:");
    for use_case in EXTRAS {
        println!("  {:<20} {}", use_case.slug(), use_case.label());
    }
}
