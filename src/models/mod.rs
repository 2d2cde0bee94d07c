//! Data models for Bookshelf

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookSummary, FilterField, Filters, Page};
pub use user::{User, UserExists};
