//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

/// In-memory post store backed by a vector behind an async RwLock.
///
/// Posts are kept in insertion order, which is also creation order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let post = Post::create(draft);
        self.posts.write().await.push(post.clone());

        tracing::debug!(post_id = %post.id, "Post inserted");
        Ok(post)
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        post.apply(draft);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
