//! User management service

use std::sync::Arc;

use crate::{error::AppResult, models::user::User, repository::UserStore};

#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn UserStore>,
}

impl UsersService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn exists(&self, email: &str) -> AppResult<bool> {
        self.store.exists(email).await
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.store.get_by_email(email).await
    }

    pub async fn create(&self, user: &User) -> AppResult<User> {
        self.store.create(user).await
    }
}
