use axum::extract::FromRef;

use crate::dashboard::{run_batch, Dashboard};
use crate::dataset::{DataError, DatasetSource};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::ServerConfig;

pub type GuardedDatasetSource = Arc<dyn DatasetSource>;
pub type GuardedDashboardCache = Arc<DashboardCache>;

/// Process-wide dashboard, computed by the first request that needs it and
/// served unchanged afterwards. Concurrent first requests wait on the same
/// batch run. A failed run leaves the cache empty so the next request retries.
pub struct DashboardCache {
    source: GuardedDatasetSource,
    cell: OnceCell<Arc<Dashboard>>,
}

impl DashboardCache {
    pub fn new(source: GuardedDatasetSource) -> DashboardCache {
        DashboardCache {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Returns the dashboard, running the batch first if needed. The batch
    /// runs on its own task, so a caller that goes away does not abandon it.
    pub async fn get(self: &Arc<Self>) -> Result<Arc<Dashboard>, DataError> {
        if let Some(dashboard) = self.cell.get() {
            return Ok(dashboard.clone());
        }
        let cache = self.clone();
        tokio::spawn(async move { cache.init().await })
            .await
            .map_err(|err| DataError::BatchAborted(err.to_string()))?
    }

    async fn init(&self) -> Result<Arc<Dashboard>, DataError> {
        let dashboard = self
            .cell
            .get_or_try_init(|| async {
                info!("Dashboard not computed yet, starting batch run...");
                let source = self.source.clone();
                let dashboard = tokio::task::spawn_blocking(move || run_batch(source.as_ref()))
                    .await
                    .map_err(|err| DataError::BatchAborted(err.to_string()))?
                    .inspect_err(|err| warn!("Batch run failed: {}", err))?;
                Ok::<_, DataError>(Arc::new(dashboard))
            })
            .await?;
        Ok(dashboard.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub dashboard: GuardedDashboardCache,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, source: GuardedDatasetSource) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            dashboard: Arc::new(DashboardCache::new(source)),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedDashboardCache {
    fn from_ref(input: &ServerState) -> Self {
        input.dashboard.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
