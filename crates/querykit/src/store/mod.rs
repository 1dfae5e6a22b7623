//! # Data Access
//!
//! [`Repository`] is the seam between the query layer and wherever rows live.
//! The query layer only ever asks a repository for the rows that satisfy a
//! [`Specification`]; how that is evaluated is the repository's business.
//!
//! [`InMemoryRepository`] is the bundled implementation, used by the CLI and
//! by tests. Errors from a repository propagate to the caller unchanged.

use crate::entity::Entity;
use crate::error::Result;
use crate::specification::Specification;

mod memory;

pub use memory::InMemoryRepository;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

/// Storage for one entity type.
///
/// All methods take `&self`; implementations provide their own interior
/// mutability and locking.
pub trait Repository<T: Entity> {
    /// Add a new entity. Fails with `Conflict` if the id is taken.
    fn insert(&self, entity: T) -> Result<()>;

    /// Replace an existing entity. Fails with `NotFound` if the id is unknown.
    fn update(&self, entity: T) -> Result<()>;

    fn get(&self, id: &T::Id) -> Result<Option<T>>;

    /// Remove and return an entity. Fails with `NotFound` if the id is unknown.
    fn delete(&self, id: &T::Id) -> Result<T>;

    /// Every entity satisfying `spec`, in id order.
    fn list(&self, spec: &Specification<T>) -> Result<Vec<T>>;

    fn count(&self, spec: &Specification<T>) -> Result<usize> {
        Ok(self.list(spec)?.len())
    }
}
