use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::StoreError;

/// Document store holding blog posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Persist a new post. The store assigns the id and creation time.
    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError>;

    /// Replace the editable fields of an existing post.
    ///
    /// Returns [`StoreError::NotFound`] when no post has this id.
    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Post, StoreError>;

    /// Delete a post by its id.
    ///
    /// Returns [`StoreError::NotFound`] when no post has this id.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;
}
