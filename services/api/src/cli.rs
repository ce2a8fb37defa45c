use crate::demo::{run_demo, DemoArgs};
use crate::documents::{run_interest, run_render, InterestArgs, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use legaldoc::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "legaldoc",
    about = "Draft Croatian court filings, contracts and land-register documents",
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
    /// Render a document request from a JSON file
    Render(RenderArgs),
    /// Calculate statutory default interest
    Interest(InterestArgs),
    /// Render one sample of every document type
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Interest(args) => run_interest(args),
        Command::Demo(args) => run_demo(args),
    }
}
