//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookSummary, FilterField, Filters, Page},
    AppState,
};

/// List books with filters and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(Filters, Page),
    responses(
        (status = 200, description = "List of books", body = Vec<BookSummary>),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(filters): Query<Filters>,
    Query(page): Query<Page>,
) -> AppResult<Json<Vec<BookSummary>>> {
    if page.offset < 0 || page.size <= 0 {
        return Err(AppError::Validation(
            "offset must be >= 0 and size must be > 0".to_string(),
        ));
    }

    let books = state.services.books.get(page, &filters).await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookSummary),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookSummary>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Get book details by registration number
#[utoipa::path(
    get,
    path = "/books/reg/{reg_num}",
    tag = "books",
    params(("reg_num" = String, Path, description = "Registration number")),
    responses(
        (status = 200, description = "Book details", body = BookSummary),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_reg_num(
    State(state): State<AppState>,
    Path(reg_num): Path<String>,
) -> AppResult<Json<BookSummary>> {
    let book = state.services.books.get_by_reg_num(&reg_num).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = BookSummary),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Registration number already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<BookSummary>)> {
    book.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.books.create(&book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = BookSummary),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(book): Json<Book>,
) -> AppResult<Json<BookSummary>> {
    book.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.services.books.update(id, &book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Distinct values of a filterable column
#[utoipa::path(
    get,
    path = "/books/filters/{field}",
    tag = "books",
    params(("field" = FilterField, Path, description = "author, language, genre or year")),
    responses(
        (status = 200, description = "Distinct values", body = Vec<String>),
        (status = 400, description = "Unknown field", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_filters(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let field: FilterField = field.parse()?;
    let values = state.services.books.get_filters(field).await?;
    Ok(Json(values))
}
