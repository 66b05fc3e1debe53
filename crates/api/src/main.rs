use std::net::SocketAddr;
use std::sync::Arc;

use portfolio_api::config::ServerConfig;
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_notify::{ContactNotifier, DisabledNotifier, EmailConfig, SmtpNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");
    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set, content management API is disabled");
    }

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = portfolio_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    portfolio_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    portfolio_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Notifications ---
    let notifier = build_notifier(&config);

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier,
    };

    let app = build_app_router(state, &config);

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

/// Pick the SMTP notifier when `SMTP_HOST` is configured, otherwise the
/// disabled one. A transport that cannot be built also disables delivery.
fn build_notifier(config: &ServerConfig) -> Arc<dyn ContactNotifier> {
    let Some(email_config) = EmailConfig::from_env() else {
        tracing::info!("SMTP_HOST not set, contact notifications disabled");
        return Arc::new(DisabledNotifier);
    };

    match SmtpNotifier::new(&email_config, config.admin_email.clone()) {
        Ok(notifier) => {
            tracing::info!(
                smtp_host = %email_config.smtp_host,
                to = %config.admin_email,
                "Contact notifications enabled",
            );
            Arc::new(notifier)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build SMTP transport, notifications disabled");
            Arc::new(DisabledNotifier)
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
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
