use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Where the user-document store lives on disk. `APP_DATA_PATH` overrides
/// the default, which the integration tests rely on.
pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/users.json"))
}

/// Read the whole store into memory. A missing file is a fresh install; a
/// corrupt one is logged and treated the same so the service still comes up.
pub async fn load_store(path: &Path) -> AppData {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppData::default(),
        Err(err) => {
            error!("failed to read user store: {err}");
            return AppData::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(err) => {
            error!("failed to parse user store: {err}");
            AppData::default()
        }
    }
}

/// Rewrite the whole store. Every mutation goes through here while the state
/// mutex is held, so one replace cycle completes at a time.
pub async fn persist_store(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
