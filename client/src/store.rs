use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::debug;
use wonders_shared::{GeoCoordinate, Monument};

use crate::config::DEFAULT_MARKER_NAME;

/// Ordered, shared monument list. Clones share the same underlying list;
/// every mutation bumps the revision seen by [`MonumentStore::subscribe`]
/// so a front end knows to redraw its annotations and rows.
#[derive(Debug, Clone)]
pub struct MonumentStore {
    monuments: Arc<RwLock<Vec<Monument>>>,
    revision_tx: Arc<watch::Sender<u64>>,
}

impl Default for MonumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MonumentStore {
    pub fn new() -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self {
            monuments: Arc::new(RwLock::new(Vec::new())),
            revision_tx: Arc::new(revision_tx),
        }
    }

    /// Snapshot of the current list, in insertion order.
    pub async fn monuments(&self) -> Vec<Monument> {
        self.monuments.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.monuments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.monuments.read().await.is_empty()
    }

    /// Replace the whole list, e.g. with the result of a catalog fetch.
    pub async fn replace_all(&self, monuments: Vec<Monument>) {
        {
            let mut guard = self.monuments.write().await;
            *guard = monuments;
        }
        self.bump();
    }

    /// Append a hand-placed marker at the coordinate and return it.
    pub async fn place_marker(&self, at: GeoCoordinate) -> Monument {
        let monument = Monument::new(DEFAULT_MARKER_NAME, at.latitude, at.longitude);
        {
            let mut guard = self.monuments.write().await;
            guard.push(monument.clone());
        }
        debug!(
            latitude = at.latitude,
            longitude = at.longitude,
            "placed marker"
        );
        self.bump();
        monument
    }

    /// Receiver whose value changes after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    fn bump(&self) {
        self.revision_tx.send_modify(|revision| *revision += 1);
    }
}

#[cfg(test)]
mod tests {
    use wonders_shared::{GeoCoordinate, Monument};

    use super::MonumentStore;
    use crate::config::DEFAULT_MARKER_NAME;

    #[tokio::test]
    async fn starts_empty() {
        let store = MonumentStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn replace_all_swaps_the_whole_list() {
        let store = MonumentStore::new();
        store
            .replace_all(vec![Monument::new("Giza", 29.9792, 31.1342)])
            .await;
        store
            .replace_all(vec![
                Monument::new("Petra", 30.3285, 35.4444),
                Monument::new("Colosseum", 41.8902, 12.4922),
            ])
            .await;

        let names = store
            .monuments()
            .await
            .into_iter()
            .map(|m| m.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Petra", "Colosseum"]);
    }

    #[tokio::test]
    async fn place_marker_appends_with_default_name() {
        let store = MonumentStore::new();
        store
            .replace_all(vec![Monument::new("Giza", 29.9792, 31.1342)])
            .await;

        let placed = store.place_marker(GeoCoordinate::new(40.7, -111.9)).await;
        assert_eq!(placed.name, DEFAULT_MARKER_NAME);

        let monuments = store.monuments().await;
        assert_eq!(monuments.len(), 2);
        assert_eq!(monuments[1], placed);
    }

    #[tokio::test]
    async fn subscribers_observe_each_mutation() {
        let store = MonumentStore::new();
        let mut revisions = store.subscribe();
        assert_eq!(*revisions.borrow_and_update(), 0);

        store.replace_all(Vec::new()).await;
        assert!(revisions.has_changed().expect("sender should be alive"));
        assert_eq!(*revisions.borrow_and_update(), 1);

        store.place_marker(GeoCoordinate::new(0.0, 0.0)).await;
        assert_eq!(*revisions.borrow_and_update(), 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_list() {
        let store = MonumentStore::new();
        let other = store.clone();
        other
            .replace_all(vec![Monument::new("Taj Mahal", 27.1751, 78.0421)])
            .await;
        assert_eq!(store.len().await, 1);
    }
}
