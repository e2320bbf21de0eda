use crate::models::DayLog;
use crate::tags::TagConfig;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<DayLog>>,
    pub tags: Arc<TagConfig>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: DayLog, tags: TagConfig) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            tags: Arc::new(tags),
        }
    }
}
