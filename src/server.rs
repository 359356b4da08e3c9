use std::{
    future::{Future, IntoFuture},
    time::Duration,
};

use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

use crate::{config::Config, error::Error, routes, shutdown};

/// Binds the configured address and serves until a termination signal.
pub async fn run(cfg: Config) -> Result<(), Error> {
    let addr = cfg.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    serve(listener, shutdown::signal()).await
}

pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    serve_with_drain(listener, shutdown, DRAIN_TIMEOUT).await
}

/// Serves the router on an already bound listener until `shutdown` resolves,
/// then waits at most `drain` for open connections to finish.
pub async fn serve_with_drain<F>(
    listener: TcpListener,
    shutdown: F,
    drain: Duration,
) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(Error::Serve)?;
    info!(%addr, "listening");

    let (fired_tx, fired_rx) = oneshot::channel::<()>();
    let shutdown = async move {
        shutdown.await;
        let _ = fired_tx.send(());
    };
    let deadline = async move {
        if fired_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(drain).await;
    };

    let server = axum::serve(listener, routes::router())
        .with_graceful_shutdown(shutdown)
        .into_future();

    tokio::select! {
        result = server => result.map_err(Error::Serve)?,
        _ = deadline => {
            warn!(drain_secs = drain.as_secs_f64(), "drain timed out, dropping open connections");
        }
    }

    info!("server stopped");
    Ok(())
}
