use std::sync::Arc;

use anyhow::Context;

use journal_api::state::AppState;
use journal_api::store::memory::MemoryStore;
use journal_api::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JOURNAL_API_PORT, JOURNAL_ADMIN_USER, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = journal_api::config::config();
    tracing::info!("Starting Journal API in {:?} mode", config.environment);

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

    // The store starts empty, so the first admin has to be seeded from config.
    if let Some(admin) = &config.admin {
        store
            .bootstrap_admin(&admin.username, &admin.password, &admin.email)
            .context("failed to seed bootstrap admin account")?;
        tracing::info!("seeded bootstrap admin account '{}'", admin.username);
    }

    let app = journal_api::app(AppState::new(store));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Journal API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
