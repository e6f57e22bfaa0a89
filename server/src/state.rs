use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use wonders_shared::Monument;

use crate::config::monuments_file;
use crate::dataset;

/// Shared app state: the catalog as typed records plus the wire payload,
/// serialized once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub monuments: Arc<Vec<Monument>>,
    pub monuments_json: Arc<Bytes>,
}

impl AppState {
    pub fn from_env() -> Result<Self, String> {
        let monuments = match monuments_file() {
            Some(path) => {
                let loaded = dataset::load_from_file(&path)?;
                info!("loaded {} monuments from {path}", loaded.len());
                loaded
            }
            None => dataset::seven_wonders(),
        };
        Self::new(monuments)
    }

    pub fn new(monuments: Vec<Monument>) -> Result<Self, String> {
        let wire = dataset::to_wire(&monuments);
        let json =
            serde_json::to_vec(&wire).map_err(|e| format!("serialize monument catalog: {e}"))?;
        Ok(Self {
            monuments: Arc::new(monuments),
            monuments_json: Arc::new(Bytes::from(json)),
        })
    }
}
