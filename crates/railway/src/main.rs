use clap::{Parser, Subcommand};
use railway::ValidationOptions;
use railway::commands::{ValidateArgs, run_demo, run_validate};
use railway::logging::{init_logging, init_panic_hook};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

/// Railway CLI - railway-oriented request validation
#[derive(Parser)]
#[command(name = "railway")]
#[command(about = "Validate requests with railway-oriented pipelines", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Validate a single request
    Validate {
        /// Name field of the request
        #[arg(short, long)]
        name: Option<String>,
        /// Email field of the request
        #[arg(short, long)]
        email: Option<String>,
        /// Load the request from a .toml or .json file; --name/--email override it
        #[arg(short, long)]
        request: Option<PathBuf>,
        /// Run all validators and report every failure
        #[arg(long)]
        parallel: bool,
        /// Do not upper-case the name of a valid request
        #[arg(long)]
        keep_case: bool,
        /// Add a stage that panics after validation
        #[arg(long)]
        fail_for_fun: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the sample requests through both pipelines
    Demo,
}

/// Application session for the Railway CLI
#[derive(Clone)]
struct RailwaySession {
    command: Commands,
}

#[async_trait::async_trait]
impl AppSession for RailwaySession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Validate {
                name,
                email,
                request,
                parallel,
                keep_case,
                fail_for_fun,
                json,
            } => run_validate(ValidateArgs {
                name: name.clone(),
                email: email.clone(),
                request: request.clone(),
                options: ValidationOptions {
                    parallel: *parallel,
                    keep_case: *keep_case,
                    fail_for_fun: *fail_for_fun,
                },
                json: *json,
            }),
            Commands::Demo => run_demo(),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();
    init_logging();
    init_panic_hook();

    let session = RailwaySession {
        command: cli.command,
    };

    // The app lifecycle calls `execute` on the session.
    let exit_code = App::default()
        .run(session, |_| async { Ok(None) })
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
