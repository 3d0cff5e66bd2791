//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{Post, PostDraft};
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

use super::connections::{DatabaseConfig, connect, ensure_schema};
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post store.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Connect to the database and make sure the `posts` table exists.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let db = connect(config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        ensure_schema(&db).await.map_err(query_error)?;

        Ok(Self::new(db))
    }
}

fn query_error(e: DbErr) -> StoreError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) => StoreError::NotFound,
        _ => StoreError::Query(e.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let active_model: post::ActiveModel = Post::create(draft).into();
        let model = active_model.insert(&self.db).await.map_err(query_error)?;

        tracing::debug!(post_id = %model.id, "Post inserted");
        Ok(model.into())
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Post, StoreError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(StoreError::NotFound)?;

        let mut active_model = existing.into_active_model();
        active_model.title = Set(draft.title().to_string());
        active_model.image = Set(draft.image().to_string());
        active_model.body = Set(draft.body().to_string());

        let model = active_model.update(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
