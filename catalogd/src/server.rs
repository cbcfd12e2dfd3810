use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use catalog_api::status::StatusCode;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::proto::http_like::{make_empty_response, read_request};
use crate::router::{self, util::error_response};
use crate::services::Services;

/// Accept connections until `shutdown` resolves. One task per connection,
/// one request per connection.
pub async fn serve<F>(listener: TcpListener, services: Arc<Services>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!(target: "catalogd", "shutting down accept loop");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(v) => v,
                    Err(e) => {
                        warn!(target: "catalogd", "accept error: {e}");
                        continue;
                    }
                };
                let services = services.clone();
                tokio::spawn(async move {
                    if let Err(err) = handle_conn(stream, &services).await {
                        warn!(target: "catalogd", "connection {peer} error: {err}");
                    }
                });
            }
        }
    }
}

pub async fn handle_conn<S>(mut stream: S, services: &Services) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let req = match read_request(&mut stream).await {
        Ok(r) => r,
        Err(code) => {
            debug!(target: "catalogd", "rejecting request with {}", code.as_u16());
            stream.write_all(&make_empty_response(code)).await?;
            stream.flush().await?;
            return Ok(());
        }
    };

    let method = req.method.clone();
    let path = req.route().to_string();
    let response = match router::handle(req, services) {
        Ok(r) => r,
        Err(e) => {
            warn!(target: "catalogd", "{method} {path} handler error: {e:#}");
            error_response(StatusCode::InternalServerError, "Internal server error")
        }
    };
    info!(target: "catalogd", "{method} {path} -> {}", response.code.as_u16());

    stream.write_all(&response.into_bytes()).await?;
    stream.flush().await?;
    let _ = stream.shutdown().await;
    Ok(())
}
