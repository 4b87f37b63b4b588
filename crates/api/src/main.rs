use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courseinsight_api::config::ServerConfig;
use courseinsight_api::router::build_app_router;
use courseinsight_api::state::AppState;
use courseinsight_core::catalog::Catalog;
use courseinsight_core::query::compute_stats;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env();

    // --- Tracing ---
    let json_layer = config
        .json_logs
        .then(|| tracing_subscriber::fmt::layer().json());
    let text_layer = (!config.json_logs).then(|| tracing_subscriber::fmt::layer());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courseinsight_api=debug,tower_http=debug".into()),
        )
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Catalog ---
    let catalog = Catalog::load(&config.catalog_path).unwrap_or_else(|e| {
        panic!(
            "Failed to load catalog from {}: {e}",
            config.catalog_path.display()
        )
    });
    let stats = compute_stats(&catalog.courses);
    tracing::info!(
        path = %config.catalog_path.display(),
        courses = stats.total_courses,
        branches = catalog.branches.len(),
        reviews = catalog.reviews.len(),
        "Catalog loaded"
    );

    // --- Router ---
    let app = build_app_router(AppState::new(catalog), &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
