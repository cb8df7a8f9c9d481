use std::sync::Arc;

use crate::store::Store;
use crate::worker::TaskDistributor;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// Transactional store (repositories + workflows)
    pub store: Store,
    /// Hand-off seam for background side effects
    pub distributor: Arc<dyn TaskDistributor>,
}

impl AppState {
    pub fn new(store: Store, distributor: Arc<dyn TaskDistributor>) -> Self {
        Self { store, distributor }
    }
}
