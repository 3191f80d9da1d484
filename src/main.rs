use filestash::config::Config;
use filestash::server;
use filestash::storage::{FileStore, InitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let store = FileStore::new(cfg.storage_dir.clone());
    let root = store.root().display();
    match store.init().await? {
        InitOutcome::Created => tracing::info!("Created storage directory {}", root),
        InitOutcome::AlreadyExists => tracing::info!("Using storage directory {}", root),
    }

    tokio::select! {
        res = server::listener::run(&cfg, store) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
