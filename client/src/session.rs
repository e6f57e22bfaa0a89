use reqwest::Url;
use tracing::info;
use wonders_shared::{CoordinateRegion, Monument};

use crate::directions::directions_url;
use crate::fetch::MonumentClient;
use crate::location::LocationTracker;
use crate::store::MonumentStore;

/// Everything a map screen works with, minus the screen: the catalog
/// client, the shared monument list, and the latest location fix.
#[derive(Debug, Clone)]
pub struct MapSession {
    client: MonumentClient,
    store: MonumentStore,
    tracker: LocationTracker,
}

impl MapSession {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(MonumentClient::new(endpoint))
    }

    pub fn with_client(client: MonumentClient) -> Self {
        Self {
            client,
            store: MonumentStore::new(),
            tracker: LocationTracker::new(),
        }
    }

    pub fn store(&self) -> &MonumentStore {
        &self.store
    }

    pub fn tracker(&self) -> &LocationTracker {
        &self.tracker
    }

    /// Fetch the remote catalog and replace the list with the result.
    /// A failed or empty fetch leaves the current list untouched; returns
    /// how many monuments were loaded.
    pub async fn refresh(&self) -> usize {
        let monuments = self.client.fetch_monuments_or_empty().await;
        if monuments.is_empty() {
            return 0;
        }
        let count = monuments.len();
        self.store.replace_all(monuments).await;
        info!("loaded {count} monuments");
        count
    }

    /// Region the view should scroll to: around the given monument, or
    /// around the current location when no monument is selected. `None`
    /// until a location fix exists.
    pub async fn focus_region(&self, showing: Option<&Monument>) -> Option<CoordinateRegion> {
        match showing {
            Some(monument) => Some(CoordinateRegion::around(monument.coordinate())),
            None => {
                let fix = self.tracker.current().await?;
                Some(CoordinateRegion::around(fix.coordinate))
            }
        }
    }

    /// Directions hand-off for a monument's callout accessory.
    pub fn directions_url(&self, to: &Monument) -> Url {
        directions_url(to.coordinate())
    }
}
