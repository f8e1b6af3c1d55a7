//! Serve command handler.

use crate::HeraldConfig;
use herald_core::UserId;
use herald_error::HeraldResult;
use herald_notify::{
    BellSink, CompositeAlertSink, DesktopNotificationSink, NotificationService, PollSchedule,
    ToastSink,
};
use herald_publish::{OauthCredentials, PlatformRegistry, PublishPipeline, TwitterClient};
use herald_server::create_router;
use herald_store::{PostStore, RestPostStore, RestStoreConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Handle the `serve` command.
///
/// Credentials and store settings are validated before anything binds
/// or dials out; an absent secret aborts startup.
pub async fn handle_serve_command(config_path: PathBuf, dry_run: bool) -> HeraldResult<()> {
    let config = HeraldConfig::from_file(&config_path)?;
    info!(config_file = ?config_path, addr = %config.bind_addr(), "Configuration loaded");

    let credentials = OauthCredentials::from_env()?;
    let store_config = RestStoreConfig::from_env()?;

    if dry_run {
        info!("DRY RUN MODE - configuration and credentials validated");
        return Ok(());
    }

    let store: Arc<dyn PostStore> = Arc::new(RestPostStore::new(store_config));
    let registry = PlatformRegistry::new(Arc::new(TwitterClient::new(credentials)));
    let pipeline = Arc::new(PublishPipeline::new(Arc::clone(&store), registry));

    let mut service = start_poller(&config, Arc::clone(&store));

    let router = create_router(pipeline);
    herald_server::serve(router, &config.bind_addr()).await?;

    if let Some(service) = service.as_mut() {
        service.stop();
    }
    info!("Shutting down");
    Ok(())
}

/// Start the notification poller when the configuration asks for one.
///
/// In-app alerts land on the toast channel and are surfaced as log
/// lines, the binary's stand-in for a visible surface.
fn start_poller(config: &HeraldConfig, store: Arc<dyn PostStore>) -> Option<NotificationService> {
    if !config.poller.enabled {
        return None;
    }

    let (toast, mut toasts) = ToastSink::channel();
    tokio::spawn(async move {
        while let Some(alert) = toasts.recv().await {
            info!(post_id = %alert.post_id(), "{}", alert.body());
        }
    });
    let sink = CompositeAlertSink::new()
        .with(Box::new(BellSink::new()))
        .with(Box::new(DesktopNotificationSink::new(
            config.poller.desktop_notifications,
        )))
        .with(Box::new(toast));

    let mut service = NotificationService::new(store, Arc::new(sink))
        .with_schedule(PollSchedule::new(config.poller.interval_seconds));
    service.start(config.poller.identity.clone().map(UserId::new));
    Some(service)
}
