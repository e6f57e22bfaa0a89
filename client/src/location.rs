use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use wonders_shared::GeoCoordinate;

/// A single observed position and when it was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    pub coordinate: GeoCoordinate,
    pub acquired: DateTime<Utc>,
}

/// Latest-known-position cell. Starts empty; each update overwrites the
/// previous fix. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct LocationTracker {
    current: Arc<RwLock<Option<LocationFix>>>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new fix at the coordinate and return it.
    pub async fn update(&self, coordinate: GeoCoordinate) -> LocationFix {
        let fix = LocationFix {
            coordinate,
            acquired: Utc::now(),
        };
        *self.current.write().await = Some(fix.clone());
        debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "current location updated"
        );
        fix
    }

    pub async fn current(&self) -> Option<LocationFix> {
        self.current.read().await.clone()
    }
}
