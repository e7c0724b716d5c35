use crate::demo::{run_appraise, run_demo, run_weights, AppraiseArgs, DemoArgs, WeightsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deal_valuation::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Deal Valuation",
    about = "Value hardware deal listings and score them on performance metrics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Appraise a listing described by a JSON request file
    Appraise(AppraiseArgs),
    /// Validate rule-group weights
    Weights(WeightsArgs),
    /// Appraise a built-in sample listing with the standard profile
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Valuation profile JSON (defaults to APP_VALUATION_PROFILE, then the standard profile)
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Appraise(args) => run_appraise(args),
        Command::Weights(args) => run_weights(args),
        Command::Demo(args) => run_demo(args),
    }
}
