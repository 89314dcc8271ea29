use std::time::Duration;

use super::upload_service::UploadService;

/// Periodically removes uploads older than `max_age`. Runs for the lifetime of
/// the server.
pub fn spawn_retention_sweeper(service: UploadService, max_age: Duration, interval: Duration) {
    log::info!(
        "Upload retention enabled: removing files older than {:?} every {:?}",
        max_age,
        interval
    );

    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match service.sweep_expired(max_age).await {
                Ok(0) => log::debug!("Retention sweep found nothing to remove"),
                Ok(removed) => log::info!("Retention sweep removed {} upload(s)", removed),
                Err(e) => log::error!("Retention sweep failed: {}", e),
            }
        }
    });
}
