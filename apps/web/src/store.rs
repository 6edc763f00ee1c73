use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::screening::ResultSet;

/// In-memory home for result sets between the upload and the results view.
///
/// A set lives from the submission that created it until the user leaves the
/// results view. When more than `capacity` sets are held the oldest is evicted.
#[derive(Clone)]
pub struct ResultStore {
    inner: Arc<RwLock<Inner>>,
    capacity: usize,
}

#[derive(Default)]
struct Inner {
    sets: HashMap<Uuid, Arc<ResultSet>>,
    order: VecDeque<Uuid>,
}

impl ResultStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, set: ResultSet) -> Arc<ResultSet> {
        let set = Arc::new(set);
        let mut inner = self.inner.write().await;

        while inner.order.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.sets.remove(&oldest);
                    debug!("Evicted result set {oldest}");
                }
                None => break,
            }
        }

        inner.order.push_back(set.id);
        inner.sets.insert(set.id, set.clone());
        set
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ResultSet>> {
        self.inner.read().await.sets.get(&id).cloned()
    }

    /// Returns whether a set was removed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let removed = inner.sets.remove(&id).is_some();
        if removed {
            inner.order.retain(|k| *k != id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.sets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(jd: &str) -> ResultSet {
        ResultSet::new(jd.to_string(), Vec::new())
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = ResultStore::new(2);
        let stored = store.insert(set("jd")).await;
        let fetched = store.get(stored.id).await.unwrap();
        assert_eq!(fetched.job_description, "jd");
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = ResultStore::new(2);
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_clears_entry() {
        let store = ResultStore::new(2);
        let stored = store.insert(set("jd")).await;
        assert!(store.remove(stored.id).await);
        assert!(!store.remove(stored.id).await);
        assert!(store.get(stored.id).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_oldest_evicted_at_capacity() {
        let store = ResultStore::new(2);
        let first = store.insert(set("one")).await;
        let second = store.insert(set("two")).await;
        let third = store.insert(set("three")).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(first.id).await.is_none());
        assert!(store.get(second.id).await.is_some());
        assert!(store.get(third.id).await.is_some());
    }

    #[tokio::test]
    async fn test_removed_slot_is_reused_without_eviction() {
        let store = ResultStore::new(2);
        let first = store.insert(set("one")).await;
        let second = store.insert(set("two")).await;
        store.remove(second.id).await;
        store.insert(set("three")).await;

        assert!(store.get(first.id).await.is_some());
    }
}
