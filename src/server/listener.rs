use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::Site;

/// Accept loop states.
pub enum AcceptorState {
    Accepting,
    Serving(TcpStream, SocketAddr),
    Stopped,
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn run<F>(cfg: &Config, site: Site, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, site, cfg.server.request_timeout(), shutdown).await
}

/// Serves connections from `listener` strictly one at a time.
///
/// Each accepted connection is processed to completion and closed before the
/// next `accept`. Errors on a connection are logged and never end the loop;
/// only `shutdown` does, and it is checked between connections.
pub async fn serve<F>(
    listener: TcpListener,
    site: Site,
    request_timeout: Option<Duration>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut state = AcceptorState::Accepting;

    loop {
        state = match state {
            AcceptorState::Accepting => {
                tokio::select! {
                    biased;

                    _ = &mut shutdown => AcceptorState::Stopped,

                    accepted = listener.accept() => match accepted {
                        Ok((socket, peer)) => AcceptorState::Serving(socket, peer),
                        Err(e) => {
                            tracing::error!("Accept failed: {}", e);
                            AcceptorState::Accepting
                        }
                    },
                }
            }

            AcceptorState::Serving(socket, peer) => {
                info!("Accepted connection from {}", peer);
                serve_connection(socket, peer, site.clone(), request_timeout).await;
                info!("Closed connection from {}", peer);
                AcceptorState::Accepting
            }

            AcceptorState::Stopped => {
                info!("Shutdown signal received");
                break;
            }
        };
    }

    Ok(())
}

async fn serve_connection(
    socket: TcpStream,
    peer: SocketAddr,
    site: Site,
    request_timeout: Option<Duration>,
) {
    let mut conn = Connection::new(socket, site);

    let result = match request_timeout {
        Some(limit) => match tokio::time::timeout(limit, conn.run()).await {
            Ok(res) => res,
            Err(_) => Err(anyhow::anyhow!("request timed out after {:?}", limit)),
        },
        None => conn.run().await,
    };

    if let Err(e) = result {
        tracing::error!("Connection error from {}: {}", peer, e);
    }

    conn.close().await;
}
