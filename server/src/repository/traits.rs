//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can read a JSON file, hold data in memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Read-only repository over a listing of entities
///
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List all entities in source order
    async fn list(&self) -> DomainResult<Vec<T>>;
}
