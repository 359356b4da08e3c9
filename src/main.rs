mod config;
mod error;
mod routes;
mod server;
mod shutdown;

use std::process::ExitCode;

use config::Config;
use error::Error;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eks_greeter=info,tower_http=info".into()),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err.report(), "exiting");
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), Error> {
    let cfg = Config::from_env()?;
    server::run(cfg).await
}
