use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    config::Config,
    repository::{DocumentStore, Repository},
    services::{Clock, ImageStore, Notifier},
};

/// Collaborators shared by every handler, wired once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub repository: Repository,
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
    pub images: Arc<dyn ImageStore>,
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        images: Arc<dyn ImageStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            repository: Repository::new(store),
            clock,
            notifier,
            images,
            config,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
