//! Book catalog service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookSummary, FilterField, Filters, Page},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List books matching the filters
    pub async fn get(&self, page: Page, filters: &Filters) -> AppResult<Vec<BookSummary>> {
        self.store.get(page, filters).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookSummary> {
        self.store.get_by_id(id).await
    }

    pub async fn get_by_reg_num(&self, reg_num: &str) -> AppResult<BookSummary> {
        self.store.get_by_reg_num(reg_num).await
    }

    pub async fn create(&self, book: &Book) -> AppResult<BookSummary> {
        self.store.create(book).await
    }

    pub async fn update(&self, id: Uuid, book: &Book) -> AppResult<BookSummary> {
        self.store.update(id, book).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await
    }

    pub async fn get_filters(&self, field: FilterField) -> AppResult<Vec<String>> {
        self.store.get_filters(field).await
    }
}
