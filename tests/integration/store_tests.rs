//! Store tests against a real PostgreSQL database (DATABASE_URL)

use bookshelf_server::{
    models::{Book, FilterField, Filters, Page, User},
    repository::{BookStore, BooksRepository, UserStore, UsersRepository},
    AppError,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    for ddl in [
        r#"CREATE TABLE IF NOT EXISTS book (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            summary TEXT,
            genre TEXT,
            year INTEGER,
            reg_num TEXT NOT NULL UNIQUE,
            publisher TEXT,
            language TEXT,
            image_uri TEXT
        )"#,
        r#"CREATE TABLE IF NOT EXISTS "user" (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            type TEXT NOT NULL
        )"#,
    ] {
        sqlx::query(ddl).execute(&pool).await.expect("Failed to create schema");
    }

    pool
}

fn unique(prefix: &str) -> String {
    format!("{}{}", prefix, &Uuid::new_v4().simple().to_string()[..10])
}

fn book(reg_num: &str, genre: &str) -> Book {
    Book {
        id: Uuid::nil(),
        title: "Abc".to_string(),
        author: unique("author-"),
        summary: "Lorem Ipsum".to_string(),
        genre: genre.to_string(),
        year: 2019,
        reg_num: reg_num.to_string(),
        publisher: "saiudhiau".to_string(),
        language: "Hebrew".to_string(),
        image_uri: "jncj.ajcbiauadnc.com".to_string(),
    }
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let store = BooksRepository::new(pool().await);
    let reg_num = unique("ISB");

    let created = store.create(&book(&reg_num, "Action")).await.unwrap();
    assert!(!created.id.is_nil());

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let by_reg = store.get_by_reg_num(&reg_num).await.unwrap();
    assert_eq!(by_reg.id, created.id);

    let mut changed = book(&reg_num, "Drama");
    changed.title = "Abcd".to_string();
    let updated = store.update(created.id, &changed).await.unwrap();
    assert_eq!(updated.title, "Abcd");
    assert_eq!(store.get_by_id(created.id).await.unwrap().genre, "Drama");

    store.delete(created.id).await.unwrap();
    let err = store.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::EntityNotFound { entity: "book", ref id } if *id == created.id.to_string()
    ));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_reg_num_is_conflict() {
    let pool = pool().await;
    let store = BooksRepository::new(pool.clone());
    let reg_num = unique("ISB");

    let first = store.create(&book(&reg_num, "Action")).await.unwrap();
    let err = store.create(&book(&reg_num, "Action")).await.unwrap_err();
    assert!(matches!(err, AppError::EntityAlreadyExists { entity: "book", .. }));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book WHERE reg_num = $1")
        .bind(&reg_num)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    store.delete(first.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_book_succeeds() {
    let store = BooksRepository::new(pool().await);
    assert!(store.delete(Uuid::new_v4()).await.is_ok());
}

#[tokio::test]
#[ignore]
async fn test_list_with_filters() {
    let store = BooksRepository::new(pool().await);
    let genre = unique("genre-");

    let a = store.create(&book(&unique("ISB"), &genre)).await.unwrap();
    let b = store.create(&book(&unique("ISB"), &genre)).await.unwrap();

    let filters = Filters {
        genre: Some(genre.clone()),
        year: Some(2019),
        ..Default::default()
    };
    let listed = store.get(Page::new(0, 10), &filters).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|s| s.genre == genre && s.summary.is_none()));

    let paged = store.get(Page::new(1, 10), &filters).await.unwrap();
    assert_eq!(paged.len(), 1);

    let genres = store.get_filters(FilterField::Genre).await.unwrap();
    assert!(genres.contains(&genre));

    store.delete(a.id).await.unwrap();
    store.delete(b.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_user_create_and_exists() {
    let store = UsersRepository::new(pool().await);
    let email = format!("{}@example.com", unique("user"));

    assert!(!store.exists(&email).await.unwrap());

    let user = User {
        id: Uuid::nil(),
        email: email.clone(),
        name: "Nitesh".to_string(),
        user_type: "admin".to_string(),
    };
    let created = store.create(&user).await.unwrap();
    assert!(!created.id.is_nil());
    assert!(store.exists(&email).await.unwrap());
    assert_eq!(store.get_by_email(&email).await.unwrap(), created);

    let err = store.create(&user).await.unwrap_err();
    assert!(matches!(err, AppError::EntityAlreadyExists { entity: "user", .. }));
}
