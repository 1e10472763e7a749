//! Ward Bot - menu-driven citizen services chat bot
//!
//! Each inbound message is routed to its user's session, which walks a
//! localized menu tree and collects complaints, problem reports and
//! requests into the ward office database.

mod api;
mod config;
mod content;
mod messenger;
mod pagination;
mod repository;
mod runtime;
mod session_store;
mod state_machine;
mod validate;

use api::{create_router, AppState};
use config::BotConfig;
use content::StaticCatalog;
use messenger::{LogOnlyMessenger, LoggingMessenger, Messenger, WebhookMessenger};
use repository::{LoggingRepository, SqliteRepository};
use runtime::{BotServices, SessionManager};
use session_store::SqliteSessionStore;
use state_machine::BotContext;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ward_bot=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = BotConfig::from_env()?;

    // Ensure database directory exists
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!(path = %config.db_path.display(), "Opening database");
    let repository = SqliteRepository::open(&config.db_path)?;
    let store = SqliteSessionStore::new(repository.connection())?;

    let messenger: Arc<dyn Messenger> = match &config.outbound_url {
        Some(url) => {
            tracing::info!(url = %url, "Delivering replies through webhook");
            Arc::new(WebhookMessenger::new(url.as_str())?)
        }
        None => {
            tracing::warn!("WARD_BOT_OUTBOUND_URL not set, replies are only returned over HTTP");
            Arc::new(LogOnlyMessenger)
        }
    };

    let services = BotServices {
        context: BotContext::new(config.tenant_id.as_str(), config.source.as_str(), Arc::new(StaticCatalog)),
        repository: Arc::new(LoggingRepository::new(Arc::new(repository))),
        messenger: Arc::new(LoggingMessenger::new(messenger)),
        store: Arc::new(store),
    };
    let sessions = Arc::new(SessionManager::new(services, config.session_ttl));

    let shutdown = CancellationToken::new();
    let sweeper = sessions.spawn_sweeper(config.sweep_interval, shutdown.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(AppState::new(sessions)).layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(tenant_id = %config.tenant_id, "Ward bot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let signal = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            signal.cancel();
        })
        .await?;

    shutdown.cancel();
    sweeper.await?;
    Ok(())
}
