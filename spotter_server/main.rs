use std::sync::Arc;

use spotter_app::{
    config::Config,
    context::AppContext,
    registry::build_dispatcher,
    services::{FsImageStore, LogNotifier, Notifier, SystemClock},
};
use spotter_core::{ApplicationError, Result};
use spotter_db::{PostgresDocumentStore, establish_connection_pool};
use spotter_web::{AppState, WebRouter};

mod logs;
mod push;

use logs::setup_logging;
use push::PushGatewayNotifier;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let (config, state) = setup_app().await?;

    WebRouter::serve(state, config.http_port).await
}

async fn setup_app() -> Result<(Arc<Config>, AppState), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let db_pool = establish_connection_pool().await?;

    sqlx::migrate!("../migrations")
        .run(&db_pool)
        .await
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

    let notifier: Arc<dyn Notifier> = match &config.push_gateway_url {
        Some(url) => {
            tracing::info!("Push notifications go through {url}");
            Arc::new(PushGatewayNotifier::new(url.clone()))
        }
        None => {
            tracing::info!("No push gateway configured, notifications are only logged.");
            Arc::new(LogNotifier)
        }
    };

    let ctx = AppContext::new(
        Arc::new(PostgresDocumentStore::new(db_pool)),
        Arc::new(SystemClock),
        notifier,
        Arc::new(FsImageStore::new(
            config.image_dir.clone(),
            config.image_base_url.clone(),
        )),
        config.clone(),
    );

    let dispatcher = Arc::new(build_dispatcher(ctx)?);
    tracing::info!(handlers = dispatcher.len(), "Dispatcher ready.");

    Ok((config, AppState::new(dispatcher)))
}
