//! Repository layer for database operations

pub mod books;
pub mod rows;
pub mod users;

use sqlx::{Pool, Postgres};

pub use books::{BookStore, BooksRepository};
pub use users::{UserStore, UsersRepository};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: BooksRepository,
    pub users: UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            users: UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
