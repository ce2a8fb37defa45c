mod cli;
mod demo;
mod documents;
mod infra;
mod routes;
mod server;

use legaldoc::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
