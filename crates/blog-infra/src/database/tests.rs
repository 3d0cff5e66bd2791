use blog_core::domain::{Post, PostDraft};
use blog_core::error::StoreError;
use blog_core::ports::PostStore;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::post;
use crate::database::postgres_store::PostgresPostStore;

fn model(title: &str) -> post::Model {
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        image: "placeholderimg.jpg".to_owned(),
        body: "<p>Content</p>".to_owned(),
        created: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post");
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let result: Option<Post> = store.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_find_all_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);

    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_all_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("one"), model("two")]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let titles: Vec<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["one", "two"]);
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let row = model("Inserted");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let post = store
        .insert(PostDraft::new("Inserted", None, "<p>Content</p>"))
        .await
        .unwrap();
    assert_eq!(post.title, "Inserted");
    assert_eq!(post.image, "placeholderimg.jpg");
}

#[tokio::test]
async fn test_replace_keeps_id_and_created() {
    let existing = model("Before");
    let updated_row = post::Model {
        title: "After".to_owned(),
        image: "after.png".to_owned(),
        body: "<b>new</b>".to_owned(),
        ..existing.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing.clone()]])
        .append_query_results([vec![updated_row]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let post = store
        .replace(
            existing.id,
            PostDraft::new(
                "After",
                Some("after.png".to_string()),
                "<b>new</b><script>x()</script>",
            ),
        )
        .await
        .unwrap();

    assert_eq!(post.id, existing.id);
    assert_eq!(post.created, chrono::DateTime::<chrono::Utc>::from(existing.created));
    assert_eq!(post.title, "After");
    assert_eq!(post.image, "after.png");
    assert_eq!(post.body, "<b>new</b>");
}

#[tokio::test]
async fn test_replace_unknown_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let result = store
        .replace(uuid::Uuid::new_v4(), PostDraft::new("x", None, ""))
        .await;
    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let result = store.delete(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(StoreError::NotFound)));
}
