//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use uuid::Uuid;

use super::rows::{classify, collect_rows, parse_id};
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookSummary, FilterField, Filters, Page},
};

const ENTITY: &str = "book";

const LIST_PROJECTION: &str = "select id, title, author, genre, image_uri from book";

const GET_BY_ID: &str = r#"
    SELECT title, author, summary, genre, year, publisher, image_uri
    FROM book
    WHERE id = $1
"#;

const GET_BY_REG_NUM: &str = r#"
    SELECT id, title, author, summary, genre, year, publisher, image_uri
    FROM book
    WHERE reg_num = $1
"#;

const FIND_ID_BY_REG_NUM: &str = "SELECT id FROM book WHERE reg_num = $1";

const CREATE_BOOK: &str = r#"
    INSERT INTO book (
        id, title, author, summary, genre, year, reg_num, publisher, language, image_uri
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
"#;

const UPDATE_BOOK: &str = r#"
    UPDATE book SET
        title = $1, author = $2, summary = $3, genre = $4, year = $5,
        reg_num = $6, publisher = $7, language = $8, image_uri = $9
    WHERE id = $10
"#;

const DELETE_BOOK: &str = "DELETE FROM book WHERE id = $1";

/// A value bound to a listing statement placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum QueryArg {
    BigInt(i64),
    Int(i32),
    Text(String),
}

/// Listing statement with its bound arguments, in placeholder order.
///
/// Pagination always takes `$1` (offset) and `$2` (size); filter values
/// follow from `$3` in the order author, language, genre, year.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub sql: String,
    pub args: Vec<QueryArg>,
}

impl ListQuery {
    pub fn build(page: Page, filters: &Filters) -> Self {
        let mut args = vec![QueryArg::BigInt(page.offset), QueryArg::BigInt(page.size)];
        let mut predicates = Vec::new();

        let mut push = |column: &str, arg: QueryArg| {
            args.push(arg);
            predicates.push(format!("{} = ${}", column, args.len()));
        };

        if let Some(author) = filters.author() {
            push("author", QueryArg::Text(author.to_string()));
        }
        if let Some(language) = filters.language() {
            push("language", QueryArg::Text(language.to_string()));
        }
        if let Some(genre) = filters.genre() {
            push("genre", QueryArg::Text(genre.to_string()));
        }
        if let Some(year) = filters.year() {
            push("year", QueryArg::Int(year));
        }

        let mut sql = LIST_PROJECTION.to_string();
        if !filters.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&predicates.join(" AND "));
        }
        sql.push_str(" offset $1 limit $2;");

        Self { sql, args }
    }
}

/// Persistence operations on books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// List books matching `filters`, one page at a time
    async fn get(&self, page: Page, filters: &Filters) -> AppResult<Vec<BookSummary>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<BookSummary>;

    async fn get_by_reg_num(&self, reg_num: &str) -> AppResult<BookSummary>;

    /// Insert a new book under a generated id. Fails with a conflict if the
    /// registration number is taken.
    async fn create(&self, book: &Book) -> AppResult<BookSummary>;

    /// Overwrite every mutable field of book `id`
    async fn update(&self, id: Uuid, book: &Book) -> AppResult<BookSummary>;

    /// Remove book `id`. Deleting a missing book is not an error.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Distinct values present in the given column
    async fn get_filters(&self, field: FilterField) -> AppResult<Vec<String>>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn listed_from_row(row: &PgRow) -> Result<BookSummary, sqlx::Error> {
    let id: String = row.try_get("id")?;
    Ok(BookSummary {
        id: parse_id(&id)?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        summary: None,
        genre: row.try_get("genre")?,
        year: None,
        publisher: None,
        image_uri: row.try_get("image_uri")?,
    })
}

fn detail_from_row(row: &PgRow, id: Uuid) -> Result<BookSummary, sqlx::Error> {
    Ok(BookSummary {
        id,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        summary: row.try_get("summary")?,
        genre: row.try_get("genre")?,
        year: row.try_get("year")?,
        publisher: row.try_get("publisher")?,
        image_uri: row.try_get("image_uri")?,
    })
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn get(&self, page: Page, filters: &Filters) -> AppResult<Vec<BookSummary>> {
        let query = ListQuery::build(page, filters);
        tracing::debug!(sql = %query.sql, "Listing books");

        let mut statement = sqlx::query(&query.sql);
        for arg in &query.args {
            statement = match arg {
                QueryArg::BigInt(v) => statement.bind(*v),
                QueryArg::Int(v) => statement.bind(*v),
                QueryArg::Text(v) => statement.bind(v.as_str()),
            };
        }

        collect_rows(statement.fetch(&self.pool), listed_from_row).await
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<BookSummary> {
        let key = id.to_string();
        let row = sqlx::query(GET_BY_ID)
            .bind(&key)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, ENTITY, &key))?;

        Ok(detail_from_row(&row, id)?)
    }

    async fn get_by_reg_num(&self, reg_num: &str) -> AppResult<BookSummary> {
        let row = sqlx::query(GET_BY_REG_NUM)
            .bind(reg_num)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, ENTITY, reg_num))?;

        let id: String = row.try_get("id")?;
        Ok(detail_from_row(&row, parse_id(&id)?)?)
    }

    async fn create(&self, book: &Book) -> AppResult<BookSummary> {
        let existing: Option<String> = sqlx::query_scalar(FIND_ID_BY_REG_NUM)
            .bind(&book.reg_num)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(existing_id) = existing {
            tracing::info!(reg_num = %book.reg_num, %existing_id, "Book already registered");
            return Err(AppError::already_exists(ENTITY, &book.reg_num));
        }

        let id = Uuid::new_v4();
        sqlx::query(CREATE_BOOK)
            .bind(id.to_string())
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.summary)
            .bind(&book.genre)
            .bind(book.year)
            .bind(&book.reg_num)
            .bind(&book.publisher)
            .bind(&book.language)
            .bind(&book.image_uri)
            .execute(&self.pool)
            .await
            // a concurrent insert can still win the race past the check above
            .map_err(|e| classify(e, ENTITY, &book.reg_num))?;

        tracing::info!(%id, reg_num = %book.reg_num, "Book created");
        Ok(BookSummary::from_book(id, book))
    }

    async fn update(&self, id: Uuid, book: &Book) -> AppResult<BookSummary> {
        let result = sqlx::query(UPDATE_BOOK)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.summary)
            .bind(&book.genre)
            .bind(book.year)
            .bind(&book.reg_num)
            .bind(&book.publisher)
            .bind(&book.language)
            .bind(&book.image_uri)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, ENTITY, &book.reg_num))?;

        if result.rows_affected() == 0 {
            tracing::debug!(%id, "Update matched no book");
        }

        Ok(BookSummary::from_book(id, book))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(DELETE_BOOK)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(%id, "Delete matched no book");
        }

        Ok(())
    }

    async fn get_filters(&self, field: FilterField) -> AppResult<Vec<String>> {
        let column = field.column();
        let query = format!(
            "select distinct {col}::text as value from book where {col} is not null order by 1;",
            col = column
        );

        let rows = sqlx::query(&query).fetch(&self.pool);
        collect_rows(rows, |row: &PgRow| row.try_get::<String, _>("value")).await
    }
}
