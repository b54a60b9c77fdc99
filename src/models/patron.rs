//! Patron model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Patron record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Patron {
    pub id: i64,
    pub name: String,
    pub contact_information: String,
}

/// Patron payload for create and full-replacement update requests
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PatronInput {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Contact information must not be empty"))]
    pub contact_information: String,
}
