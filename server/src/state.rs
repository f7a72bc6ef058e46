use crate::config::Config;
use crate::store::RoomStore;
use hugo::{ExporterConfig, RoomExporter};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RoomStore>,
    pub exporter: Arc<RoomExporter>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let exporter = RoomExporter::new(ExporterConfig {
            fetch_timeout: Duration::from_secs(config.export.fetch_timeout_secs),
            brand_asset_path: config.export.brand_asset_path.clone(),
        });

        Self {
            store: Arc::new(RoomStore::new()),
            exporter: Arc::new(exporter),
            config: Arc::new(config),
        }
    }
}
