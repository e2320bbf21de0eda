use crate::errors::AppError;
use crate::models::DayLog;
use crate::tags::TagConfig;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/day_log.json"))
}

pub fn resolve_tags_path() -> Option<PathBuf> {
    env::var("APP_TAGS_PATH").ok().map(PathBuf::from)
}

pub async fn load_data(path: &Path) -> DayLog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse day log: {err}");
                DayLog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => DayLog::default(),
        Err(err) => {
            error!("failed to read day log: {err}");
            DayLog::default()
        }
    }
}

/// Tag vocabulary override. Without a path (or when the file is unreadable
/// or malformed) the built-in configuration applies.
pub async fn load_tag_config(path: Option<&Path>) -> TagConfig {
    let Some(path) = path else {
        return TagConfig::default();
    };
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(config) => config,
            Err(err) => {
                error!("failed to parse tag config: {err}");
                TagConfig::default()
            }
        },
        Err(err) => {
            error!("failed to read tag config: {err}");
            TagConfig::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &DayLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
