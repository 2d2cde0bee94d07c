//! User model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User account. `type` is a free-form role such as "admin".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct User {
    #[serde(default)]
    pub id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    pub user_type: String,
}

/// Answer of the existence check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserExists {
    pub email: String,
    pub exists: bool,
}
