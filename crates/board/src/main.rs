use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobdeck_board::{BoardConfig, JobBoard, ListState};
use jobdeck_client::{Gateway, OperationCache};
use jobdeck_core::CreateJobInput;

/// Job board client for the GraphQL backend.
#[derive(Parser, Debug)]
#[command(name = "jobdeck")]
#[command(version)]
#[command(about = "Browse and post jobs on the GraphQL job board", long_about = None)]
struct Cli {
    /// GraphQL endpoint URL (overrides JOBDECK_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Bearer token for authenticated operations (overrides JOBDECK_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the job listing (the default)
    Jobs,
    /// Show one job with its full description
    Job {
        /// Job id
        id: String,
    },
    /// Show a company and its open jobs
    Company {
        /// Company id
        id: String,
    },
    /// Post a new job
    Create {
        /// Job title
        #[arg(long)]
        title: String,
        /// Job description
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobdeck=warn,jobdeck_board=warn,jobdeck_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // --- Configuration (flags override environment) ---
    let mut config = BoardConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(token) = cli.token {
        config.token = Some(token);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    tracing::debug!(endpoint = %config.endpoint, "Loaded board configuration");

    // --- Gateway ---
    let cache = Arc::new(OperationCache::new());
    let gateway = Arc::new(Gateway::new(&config.endpoint, config.credentials()).with_cache(cache));

    let result = match cli.command.unwrap_or(Command::Jobs) {
        Command::Jobs => run_board(Arc::clone(&gateway)).await,
        Command::Job { id } => show_job(&gateway, &id).await,
        Command::Company { id } => show_company(&gateway, &id).await,
        Command::Create { title, description } => post_job(&gateway, title, description).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Mount the listing view, wait for the fetch to settle, and render it.
async fn run_board(gateway: Arc<Gateway>) -> Result<(), String> {
    let board = JobBoard::new(gateway);
    board.mount();

    let settled = board.wait_settled().await;
    let rows = board.rows();
    board.unmount();

    match settled {
        ListState::Loaded(jobs) => {
            if jobs.is_empty() {
                println!("No jobs posted yet.");
            } else {
                for row in rows {
                    println!("{row}");
                }
            }
            Ok(())
        }
        ListState::Failed(message) => Err(message),
        ListState::NotLoaded | ListState::Loading => Err("listing never settled".to_string()),
    }
}

async fn show_job(gateway: &Gateway, id: &str) -> Result<(), String> {
    let job = gateway.get_job(id).await.map_err(|e| e.to_string())?;

    println!("[{}] {}", job.id, job.title);
    println!("Company: {} ({})", job.company.name, job.company.id);
    if let Some(description) = job.description.filter(|d| !d.is_empty()) {
        println!();
        println!("{description}");
    }
    Ok(())
}

async fn show_company(gateway: &Gateway, id: &str) -> Result<(), String> {
    let company = gateway.get_company(id).await.map_err(|e| e.to_string())?;

    println!("{} ({})", company.name, company.id);
    if let Some(description) = company.description.as_deref().filter(|d| !d.is_empty()) {
        println!("{description}");
    }
    println!();
    if company.jobs.is_empty() {
        println!("No open jobs.");
    } else {
        println!("Open jobs:");
        for job in &company.jobs {
            println!("  [{}] {}", job.id, job.title);
        }
    }
    Ok(())
}

async fn post_job(gateway: &Gateway, title: String, description: String) -> Result<(), String> {
    let job = gateway
        .create_job(CreateJobInput::new(title, description))
        .await
        .map_err(|e| e.to_string())?;

    println!("Created job [{}] {}", job.id, job.title);
    Ok(())
}
