use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle on the user-document store. The mutex spans every
/// fetch-modify-replace cycle including the file write, so concurrent
/// writers to the same username cannot lose updates.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(data)),
        }
    }
}
