//! Users repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use super::rows::{classify, parse_id};
use crate::{error::AppResult, models::user::User};

const ENTITY: &str = "user";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_email(&self, email: &str) -> AppResult<User>;

    async fn exists(&self, email: &str) -> AppResult<bool>;

    /// Insert a user under a generated id
    async fn create(&self, user: &User) -> AppResult<User>;
}

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UsersRepository {
    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        let row = sqlx::query(r#"SELECT id, email, name, type FROM "user" WHERE email = $1"#)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, ENTITY, email))?;

        let id: String = row.try_get("id")?;
        Ok(User {
            id: parse_id(&id)?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            user_type: row.try_get("type")?,
        })
    }

    async fn exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM "user" WHERE email = $1)"#)
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let id = Uuid::new_v4();
        sqlx::query(r#"INSERT INTO "user" (id, email, name, type) VALUES ($1, $2, $3, $4)"#)
            .bind(id.to_string())
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.user_type)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, ENTITY, &user.email))?;

        tracing::info!(%id, email = %user.email, "User created");
        Ok(User {
            id,
            ..user.clone()
        })
    }
}
