use tokio::sync::RwLock;

use crate::error::{ServiceError, ServiceResult};

/// Where a freshly created record lands in its sequence. Feed-like entities
/// (projects, messages, files) go newest-first; todos keep list order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertAt {
    Front,
    Back,
}

/// A record kind held by an [`EntityStore`].
pub trait Record: Clone + Send + Sync {
    const INSERT_AT: InsertAt;

    fn id(&self) -> &str;

    /// The NotFound variant for this entity kind.
    fn not_found(id: &str) -> ServiceError;
}

/// The in-memory ordered sequence behind one entity service.
///
/// Every read and every mutation result is a clone of the stored record, so
/// callers can never reach internal state through a returned value. Lookup
/// is a linear scan by id; insertion order is otherwise preserved.
pub struct EntityStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> EntityStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: RwLock::new(seed),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> ServiceResult<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| T::not_found(id))
    }

    /// Builds a record from the current sequence length and inserts it at
    /// the entity's position. The length is taken under the same write lock
    /// so creation-order numbering cannot interleave.
    pub async fn insert_with(&self, build: impl FnOnce(usize) -> T) -> T {
        let mut records = self.records.write().await;
        let record = build(records.len());
        let copy = record.clone();
        match T::INSERT_AT {
            InsertAt::Front => records.insert(0, record),
            InsertAt::Back => records.push(record),
        }
        copy
    }

    pub async fn insert(&self, record: T) -> T {
        self.insert_with(move |_| record).await
    }

    pub async fn modify(&self, id: &str, apply: impl FnOnce(&mut T)) -> ServiceResult<T> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| T::not_found(id))?;
        apply(record);
        Ok(record.clone())
    }

    pub async fn remove(&self, id: &str) -> ServiceResult<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| T::not_found(id))?;
        records.remove(index);
        Ok(())
    }
}
