//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    /// No uniqueness is enforced on the ISBN
    pub isbn: String,
}

/// Book payload for create and full-replacement update requests
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(range(min = 0, max = 9999, message = "Publication year out of range"))]
    pub publication_year: i32,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
}
