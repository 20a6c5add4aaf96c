// Serve loop module
// Sequential accept loop: one connection is served before the next accept

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use crate::config::AppState;
use crate::logger;

/// Accept and serve connections one at a time until `shutdown` resolves.
///
/// Shutdown is also watched while a connection is being served; the
/// connection in progress is dropped. The listener is dropped, releasing
/// the port, before this returns.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        tokio::select! {
                            () = serve_connection(stream, peer_addr, &state) => {}
                            () = &mut shutdown => break,
                        }
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
}
