use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
use uuid::Uuid;

use crate::database::entity::{category, post};
use crate::database::postgres_repo::{PostgresCategoryRepository, PostgresPostRepository};
use blogengine_core::domain::{Category, Post};
use blogengine_core::error::{DomainError, RepoError};
use blogengine_core::ports::{BaseRepository, CategoryRepository, PostRepository};
use blogengine_core::queries::posts_in_category;

fn python_model(id: Uuid) -> category::Model {
    category::Model {
        id,
        name: "Python".to_owned(),
        description: "Posts about Python".to_owned(),
        slug: "python".to_owned(),
    }
}

fn post_model(slug: &str, category_id: Option<Uuid>, day: u32) -> post::Model {
    post::Model {
        id: Uuid::new_v4(),
        title: format!("Post {slug}"),
        pub_date: Utc.with_ymd_and_hms(2013, 12, day, 8, 0, 0).unwrap().into(),
        text: "Content".to_owned(),
        slug: slug.to_owned(),
        author_id: Uuid::new_v4(),
        site_id: Uuid::new_v4(),
        category_id,
    }
}

#[tokio::test]
async fn test_find_category_by_slug() {
    let category_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![python_model(category_id)]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let category = repo.find_by_slug("python").await.unwrap().unwrap();

    assert_eq!(category.id, category_id);
    assert_eq!(category.absolute_url(), "/category/python");
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = post_model("my-first-post", None, 28);
    let post_id = model.id;
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.absolute_url(), "/2013/12/my-first-post/");
}

#[tokio::test]
async fn test_posts_in_category_maps_rows() {
    let category_id = Uuid::new_v4();
    let categories = PostgresCategoryRepository::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![python_model(category_id)]])
            .into_connection(),
    );
    let posts = PostgresPostRepository::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model("newer", Some(category_id), 28),
                post_model("older", Some(category_id), 1),
            ]])
            .into_connection(),
    );

    let found = posts_in_category(&categories, &posts, "python")
        .await
        .unwrap();

    let slugs: Vec<&str> = found.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["newer", "older"]);
    assert!(found.iter().all(|p| p.category_id == Some(category_id)));
}

#[tokio::test]
async fn test_posts_in_unknown_category_is_empty() {
    let categories = PostgresCategoryRepository::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<category::Model>::new()])
            .into_connection(),
    );
    // No results queued: the post table must not be queried.
    let posts =
        PostgresPostRepository::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let found = posts_in_category(&categories, &posts, "perl").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_delete_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_save_validates_before_writing() {
    let repo =
        PostgresCategoryRepository::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let result = repo.save(Category::new("", "no name")).await;

    assert!(matches!(
        result,
        Err(RepoError::Validation(DomainError::MissingField { field: "name" }))
    ));
}

#[tokio::test]
async fn test_save_inserts_when_update_misses() {
    let category = Category::new("Python", "Posts about Python");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![
            // UPDATE ... RETURNING matches no row
            Vec::<category::Model>::new(),
            // INSERT ... RETURNING
            vec![python_model(category.id)],
        ])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let saved = repo.save(category.clone()).await.unwrap();

    assert_eq!(saved.id, category.id);
    assert_eq!(saved.slug, "python");
}

#[tokio::test]
async fn test_save_updates_existing_row() {
    let category = Category::new("Python", "Posts about Python").with_slug("python");
    // Only the UPDATE result is queued; an INSERT would find nothing.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![python_model(category.id)]])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let saved = repo.save(category.clone()).await.unwrap();

    assert_eq!(saved, category);
}

#[tokio::test]
async fn test_duplicate_slug_is_constraint_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<category::Model>::new()])
        .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
            r#"duplicate key value violates unique constraint "categories_slug_key""#.to_owned(),
        ))])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let result = repo.save(Category::new("Python!", "Same slug")).await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_unknown_category_is_constraint_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
            r#"insert or update on table "posts" violates foreign key constraint "fk-posts-category_id""#
                .to_owned(),
        ))])
        .into_connection();

    let mut post: Post = post_model("orphan", None, 3).into();
    post.category_id = Some(Uuid::new_v4());

    let repo = PostgresPostRepository::new(db);
    let result = repo.save(post).await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_other_write_failure_is_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
            "canceling statement due to statement timeout".to_owned(),
        ))])
        .into_connection();

    let repo = PostgresCategoryRepository::new(db);
    let result = repo.save(Category::new("Python", "Posts about Python")).await;

    assert!(matches!(result, Err(RepoError::Query(_))));
}
