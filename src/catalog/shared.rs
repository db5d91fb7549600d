//! Shared, lock-guarded access to a catalog.
//!
//! Mutations (add, play, remove) hold the write lock across the whole
//! check-then-act so id assignment and view counts cannot race. Reads share
//! the read lock and hand back owned snapshots.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::CatalogResult;
use super::service::CatalogService;
use crate::domain::{Content, ContentId, Genre};

/// Cloneable handle to one catalog shared between tasks
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogService>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already populated catalog
    pub fn from_service(service: CatalogService) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    pub async fn add(
        &self,
        title: &str,
        genre: impl Into<Option<Genre>>,
        length_minutes: i32,
        age_rating: i32,
    ) -> CatalogResult<Content> {
        self.inner
            .write()
            .await
            .add(title, genre, length_minutes, age_rating)
    }

    pub async fn catalog(&self) -> Vec<Content> {
        self.inner.read().await.catalog()
    }

    pub async fn find_by_id(&self, id: ContentId) -> Option<Content> {
        self.inner.read().await.find_by_id(id).cloned()
    }

    pub async fn play(&self, content_id: ContentId, user_age: i32) -> CatalogResult<bool> {
        self.inner.write().await.play(content_id, user_age)
    }

    pub async fn find_by_genre(&self, genre: Genre) -> Vec<Content> {
        self.inner
            .read()
            .await
            .find_by_genre(genre)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn total_runtime_by_genre(&self, genre: Genre) -> u64 {
        self.inner.read().await.total_runtime_by_genre(genre)
    }

    pub async fn top_trending(&self, n: i32) -> CatalogResult<Vec<Content>> {
        let guard = self.inner.read().await;
        let top = guard.top_trending(n)?;
        Ok(top.into_iter().cloned().collect())
    }

    pub async fn most_viewed_in_genre(&self, genre: Genre) -> Option<Content> {
        self.inner.read().await.most_viewed_in_genre(genre).cloned()
    }

    pub async fn remove_by_id(&self, id: ContentId) -> bool {
        self.inner.write().await.remove_by_id(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
