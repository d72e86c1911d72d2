//! In-memory collection lookup

use serde::de::DeserializeOwned;

use super::Resolver;
use crate::domain::Entity;
use crate::filter::ListFilter;

/// Fixed in-memory collection of records
#[derive(Debug, Clone)]
pub struct MockCollection<E> {
    records: Vec<E>,
}

impl<E> Default for MockCollection<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<E: Entity> MockCollection<E> {
    pub fn new(records: Vec<E>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error>
    where
        E: DeserializeOwned,
    {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// First record satisfying the predicate
    pub fn find(&self, predicate: impl Fn(&E) -> bool) -> Option<&E> {
        self.records.iter().find(|record| predicate(record))
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.find(|record| record.id() == id)
    }

    pub fn all(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching a list filter, in collection order
    pub fn filter(&self, filter: &ListFilter) -> Vec<&E> {
        filter.apply(&self.records)
    }
}

impl<E: Entity> Resolver<E> for MockCollection<E> {
    fn resolve(&self, id: &str) -> Option<E> {
        let found = self.get(id).cloned();
        if found.is_none() {
            tracing::debug!(collection = E::COLLECTION, id, "No record with this id");
        }
        found
    }
}
