use hanzi_config::Config;
use tokio::sync::RwLock;

use crate::error::LoadError;

/// Progress of the one-time dataset load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready {
        records: usize,
    },
    Failed(LoadError),
}

#[derive(Default)]
pub struct AppState {
    pub config: RwLock<Config>,
    pub load_status: RwLock<LoadStatus>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            load_status: RwLock::new(LoadStatus::Loading),
        }
    }
}
