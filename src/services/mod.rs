//! Business logic services

pub mod books;
pub mod users;

use std::sync::Arc;

use crate::repository::{BookStore, Repository, UserStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: Repository) -> Self {
        Self::with_stores(Arc::new(repository.books), Arc::new(repository.users))
    }

    /// Create all services on top of arbitrary store implementations
    pub fn with_stores(books: Arc<dyn BookStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            books: books::BooksService::new(books),
            users: users::UsersService::new(users),
        }
    }
}
