use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Repository;
use crate::entity::Entity;
use crate::error::{QueryError, Result};
use crate::specification::Specification;

/// `BTreeMap`-backed repository.
///
/// Listing walks the map in key order, so results come back in id order
/// before any explicit ordering is applied.
pub struct InMemoryRepository<T: Entity> {
    rows: RwLock<BTreeMap<T::Id, T>>,
    simulate_write_error: AtomicBool,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            simulate_write_error: AtomicBool::new(false),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository, failing on the first duplicate id.
    pub fn with_rows(rows: impl IntoIterator<Item = T>) -> Result<Self>
    where
        T: Clone,
    {
        let repo = Self::new();
        for row in rows {
            repo.insert(row)?;
        }
        Ok(repo)
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<T::Id, T>>> {
        self.rows
            .read()
            .map_err(|_| QueryError::Store("Repository lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<T::Id, T>>> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            tracing::warn!("simulated repository write failure");
            return Err(QueryError::Store("Simulated write error".to_string()));
        }
        self.rows
            .write()
            .map_err(|_| QueryError::Store("Repository lock poisoned".to_string()))
    }
}

impl<T: Entity + Clone> Repository<T> for InMemoryRepository<T> {
    fn insert(&self, entity: T) -> Result<()> {
        let mut rows = self.write()?;
        let id = entity.id().clone();
        if rows.contains_key(&id) {
            return Err(QueryError::Conflict(id.to_string()));
        }
        rows.insert(id, entity);
        Ok(())
    }

    fn update(&self, entity: T) -> Result<()> {
        let mut rows = self.write()?;
        match rows.get_mut(entity.id()) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(QueryError::NotFound(entity.id().to_string())),
        }
    }

    fn get(&self, id: &T::Id) -> Result<Option<T>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn delete(&self, id: &T::Id) -> Result<T> {
        self.write()?
            .remove(id)
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }

    fn list(&self, spec: &Specification<T>) -> Result<Vec<T>> {
        let rows = self.read()?;
        Ok(spec.filter(rows.values()).cloned().collect())
    }

    fn count(&self, spec: &Specification<T>) -> Result<usize> {
        let rows = self.read()?;
        Ok(spec.filter(rows.values()).count())
    }
}
