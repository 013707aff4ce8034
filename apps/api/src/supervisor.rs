//! Store connection supervisor.
//!
//! Bootstrap (ping, schema, optional seed) is retried on a fixed delay until
//! it succeeds. After that the store keeps being probed on the same interval
//! and the readiness flag follows the probe result.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::jobs::seed::sample_jobs;
use crate::state::Readiness;
use crate::store::JobBoardStore;

pub struct SupervisorSettings {
    pub retry_delay: Duration,
    pub seed_jobs: bool,
}

/// Runs forever; spawn it.
pub async fn supervise_store(
    store: Arc<dyn JobBoardStore>,
    readiness: Readiness,
    settings: SupervisorSettings,
) {
    let mut attempt: u64 = 0;
    loop {
        attempt += 1;
        match bootstrap(store.as_ref(), settings.seed_jobs).await {
            Ok(()) => break,
            Err(e) => {
                error!("Store connection attempt {attempt} failed: {e}");
                warn!("Retrying store connection in {:?}", settings.retry_delay);
                tokio::time::sleep(settings.retry_delay).await;
            }
        }
    }

    readiness.set(true);
    info!("Store ready after {attempt} attempt(s)");

    loop {
        tokio::time::sleep(settings.retry_delay).await;
        match store.ping().await {
            Ok(()) => {
                if !readiness.set(true) {
                    info!("Store connection recovered");
                }
            }
            Err(e) => {
                if readiness.set(false) {
                    warn!("Store became unreachable: {e}");
                }
            }
        }
    }
}

async fn bootstrap(store: &dyn JobBoardStore, seed_jobs: bool) -> Result<(), AppError> {
    store.ping().await?;
    info!("Connected to store");
    store.prepare().await?;
    if seed_jobs {
        let seeded = store.replace_jobs(sample_jobs()).await?;
        info!("Seeded store with {} sample jobs", seeded.len());
    }
    Ok(())
}
