//! In-memory address record store.
//!
//! Records live for the lifetime of the process and are never updated or
//! deleted. Listing preserves submission order. Identifiers are sequential
//! starting at 1.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use scanpost_core::{AddressRecord, AddressSubmission};
use tokio::sync::RwLock;
use tracing::info;

/// Shared handle to the process-local address store.
#[derive(Clone, Default)]
pub struct AddressStore {
    records: Arc<RwLock<Vec<AddressRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl AddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an id to a validated submission and store it.
    pub async fn insert(&self, submission: AddressSubmission) -> AddressRecord {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let record = AddressRecord::from_submission(id, submission);

        let mut records = self.records.write().await;
        records.push(record.clone());
        info!(id, total = records.len(), "stored address record");
        record
    }

    /// Fetch one record by its exact identifier.
    pub async fn get(&self, id: u64) -> Option<AddressRecord> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id == id).cloned()
    }

    /// All records in submission order.
    pub async fn list(&self) -> Vec<AddressRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> AddressSubmission {
        AddressSubmission {
            full_name: name.into(),
            address_line1: "12 MG Road".into(),
            postal_code: "560001".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = AddressStore::new();
        let a = store.insert(submission("A")).await;
        let b = store.insert(submission("B")).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn get_by_exact_id() {
        let store = AddressStore::new();
        let inserted = store.insert(submission("Asha")).await;
        let fetched = store.get(inserted.id).await.unwrap();
        assert_eq!(fetched.full_name, "Asha");
        assert!(store.get(999).await.is_none());
    }

    #[tokio::test]
    async fn list_preserves_submission_order() {
        let store = AddressStore::new();
        for name in ["A", "B", "C"] {
            store.insert(submission(name)).await;
        }
        let names: Vec<_> = store.list().await.into_iter().map(|r| r.full_name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = AddressStore::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(submission("X")).await.id
            }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
