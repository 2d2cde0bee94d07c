//! Book model and listing parameters

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Full book record, used as the create/update request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Book {
    /// Ignored on create, taken from the path on update
    #[serde(default)]
    pub id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub genre: String,
    #[validate(range(min = 0, max = 9999))]
    pub year: i32,
    /// Registration number, unique across the catalog
    #[validate(length(min = 1, max = 64))]
    pub reg_num: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub image_uri: String,
}

/// Projection returned by listing and detail operations.
///
/// Listing only fills id, title, author, genre and image_uri.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub image_uri: String,
}

impl BookSummary {
    /// Detail view of a book the caller already holds, under the given id
    pub fn from_book(id: Uuid, book: &Book) -> Self {
        Self {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            summary: Some(book.summary.clone()),
            genre: book.genre.clone(),
            year: Some(book.year),
            publisher: Some(book.publisher.clone()),
            image_uri: book.image_uri.clone(),
        }
    }
}

/// Optional listing filters. Empty strings and a zero year mean "no constraint".
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct Filters {
    pub author: Option<String>,
    pub language: Option<String>,
    pub genre: Option<String>,
    /// `year=` in a query string is read as no year
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub year: Option<i32>,
}

impl Filters {
    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(&self.language)
    }

    pub fn genre(&self) -> Option<&str> {
        non_empty(&self.genre)
    }

    pub fn year(&self) -> Option<i32> {
        self.year.filter(|y| *y != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.author().is_none()
            && self.language().is_none()
            && self.genre().is_none()
            && self.year().is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Offset/size pagination cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct Page {
    pub offset: i64,
    /// Defaults to 20
    pub size: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self { offset: 0, size: 20 }
    }
}

impl Page {
    pub fn new(offset: i64, size: i64) -> Self {
        Self { offset, size }
    }
}

/// Book columns whose distinct values can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Author,
    Language,
    Genre,
    Year,
}

impl FilterField {
    /// Column name; only these constants ever reach the SQL text
    pub fn column(&self) -> &'static str {
        match self {
            FilterField::Author => "author",
            FilterField::Language => "language",
            FilterField::Genre => "genre",
            FilterField::Year => "year",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl std::str::FromStr for FilterField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "author" => Ok(FilterField::Author),
            "language" => Ok(FilterField::Language),
            "genre" => Ok(FilterField::Genre),
            "year" => Ok(FilterField::Year),
            other => Err(AppError::BadRequest(format!("Unknown filter field: {}", other))),
        }
    }
}
