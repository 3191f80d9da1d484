use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::storage::FileStore;

/// Binds the configured address and serves forever.
///
/// A bind failure is returned; nothing after that is.
pub async fn run(cfg: &Config, store: FileStore) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("can't listen {addr}"))?;
    info!("Listening on {}", addr);

    serve(listener, store, cfg.max_header_size).await;
    Ok(())
}

/// Accepts connections from an already bound listener, one detached task per
/// connection. There is no limit on how many run at once.
pub async fn serve(listener: TcpListener, store: FileStore, max_header_size: usize) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("can't accept: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let store = store.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store, max_header_size);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
