//! Row mapping and driver error classification shared by the stores

use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use crate::error::AppError;

/// Classify a driver error for a lookup of `entity` by `key`.
///
/// `RowNotFound` becomes `EntityNotFound`, a unique-constraint violation
/// becomes `EntityAlreadyExists`, anything else stays a database error.
pub fn classify(err: sqlx::Error, entity: &'static str, key: &str) -> AppError {
    match err {
        sqlx::Error::RowNotFound => AppError::not_found(entity, key),
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::already_exists(entity, key)
        }
        other => AppError::Database(other),
    }
}

/// Parse a UUID stored as text
pub fn parse_id(raw: &str) -> Result<Uuid, sqlx::Error> {
    Uuid::parse_str(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// Collect a row stream in order, decoding each row with `decode`.
///
/// A decode failure fails the whole call. A stream error before the first
/// row is the statement itself failing and is returned as well. A stream
/// error once rows have been delivered is a cursor error: it is logged and
/// the rows read so far are kept.
pub async fn collect_rows<R, T, S, F>(mut rows: S, decode: F) -> Result<Vec<T>, AppError>
where
    S: Stream<Item = Result<R, sqlx::Error>> + Unpin,
    F: Fn(&R) -> Result<T, sqlx::Error>,
{
    let mut out = Vec::new();

    while let Some(next) = rows.next().await {
        match next {
            Ok(row) => out.push(decode(&row)?),
            Err(e) if out.is_empty() => return Err(AppError::Database(e)),
            Err(e) => {
                tracing::error!(rows_read = out.len(), "Row iteration failed: {}", e);
                break;
            }
        }
    }

    Ok(out)
}
