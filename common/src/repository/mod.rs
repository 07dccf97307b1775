pub mod mongo_repository;
pub mod test_repository;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error;

#[async_trait]
pub trait Repository<T: Send + Sync>: Send + Sync {
    /// Resolves once the backing store is reachable.
    async fn ensure_connected(&self) -> error::Result<()>;
    /// Stores a new document. Never deduplicates.
    async fn insert(&self, item: &T) -> error::Result<()>;
}

pub type RepositoryObject<T> = Arc<dyn Repository<T>>;
