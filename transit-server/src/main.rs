use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transit_server::catalog::{CatalogProvider, EmbeddedCatalog, FileCatalog};
use transit_server::config::ServerConfig;
use transit_server::planner::PlannerConfig;
use transit_server::web::{AppState, create_router};

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config = ServerConfig::from_env()?;

    // Load the timetable (fail fast if it is unreadable)
    let provider: Box<dyn CatalogProvider> = match &config.timetable_path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(EmbeddedCatalog),
    };
    let timetable = provider.load()?;

    for issue in timetable.integrity_issues() {
        warn!(%issue, "timetable integrity");
    }
    info!(
        routes = timetable.routes().len(),
        "loaded timetable"
    );

    let state = AppState::new(timetable, PlannerConfig::default(), &config.pdf_path);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "St Helena journey planner listening");
    info!("  GET  /                      - Journey planner page");
    info!("  GET  /health                - Health check");
    info!("  GET  /api/timetable-data    - Timetable JSON (?route=<id>)");
    info!("  GET  /api/timetable-pdf     - Printable timetables");
    info!("  GET  /api/stops             - Stop names");
    info!("  POST /api/journey/plan      - Plan a journey");
    info!("  POST /api/quotes/taxi       - Taxi fare estimate");
    info!("  POST /api/quotes/car-hire   - Car hire quote");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
