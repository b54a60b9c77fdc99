//! Patrons repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::patron::{Patron, PatronInput},
};

/// Storage interface for patrons
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatronsRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Patron>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Patron>>;
    async fn create(&self, data: &PatronInput) -> AppResult<Patron>;
    /// Full replacement; returns None when no patron with this id exists
    async fn update(&self, id: i64, data: &PatronInput) -> AppResult<Option<Patron>>;
    /// Returns false when no patron with this id exists
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct PgPatronsRepository {
    pool: Pool<Postgres>,
}

impl PgPatronsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatronsRepository for PgPatronsRepository {
    async fn find_all(&self) -> AppResult<Vec<Patron>> {
        let patrons = sqlx::query_as::<_, Patron>("SELECT * FROM patrons ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(patrons)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Patron>> {
        let patron = sqlx::query_as::<_, Patron>("SELECT * FROM patrons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(patron)
    }

    async fn create(&self, data: &PatronInput) -> AppResult<Patron> {
        let patron = sqlx::query_as::<_, Patron>(
            r#"
            INSERT INTO patrons (name, contact_information)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.contact_information)
        .fetch_one(&self.pool)
        .await?;
        Ok(patron)
    }

    async fn update(&self, id: i64, data: &PatronInput) -> AppResult<Option<Patron>> {
        let patron = sqlx::query_as::<_, Patron>(
            r#"
            UPDATE patrons
            SET name = $1, contact_information = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.contact_information)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(patron)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM patrons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
