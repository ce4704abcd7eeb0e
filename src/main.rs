use mimalloc::MiMalloc;
use school_locator::config::{CONFIG, LISTEN_ADDR};
use school_locator::db::SchoolsStorage;
use school_locator::router::{SchoolsState, schools_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database = %cfg.redacted_target(),
        loglevel = %cfg.loglevel,
        init_schema = cfg.init_schema
    );

    // One pool for the whole process, shared by every request.
    let storage = SchoolsStorage::connect(&cfg.connection_url()?).await?;
    if cfg.init_schema {
        storage.init_schema().await?;
    }
    info!(backend = ?storage.backend(), "connected to database");

    let state = SchoolsState::new(storage.clone());
    let app = schools_router(state);

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    info!("Server is running on {}", LISTEN_ADDR);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await;
    info!("database pool closed; bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
