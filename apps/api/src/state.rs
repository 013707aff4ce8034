use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::auth::token::{MasterCredentials, TokenSigner};
use crate::config::Config;
use crate::store::JobBoardStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobBoardStore>,
    pub config: Config,
    pub master: MasterCredentials,
    pub tokens: TokenSigner,
    /// Set by the store supervisor; read by `/ready`.
    pub readiness: Readiness,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn JobBoardStore>) -> Self {
        AppState {
            master: MasterCredentials::new(&config.master_username, &config.master_password),
            tokens: TokenSigner::new(&config.jwt_secret),
            readiness: Readiness::default(),
            store,
            config,
        }
    }
}

/// Whether the store is currently reachable.
#[derive(Clone, Default)]
pub struct Readiness(Arc<AtomicBool>);

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns the previous value.
    pub fn set(&self, ready: bool) -> bool {
        self.0.swap(ready, Ordering::AcqRel)
    }
}
